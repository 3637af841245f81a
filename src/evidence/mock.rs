//! In-memory evidence doubles.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::error::EvidenceError;
use super::{EvidenceSource, SearchProvider};

/// Evidence source answering from a fixed sentence -> URLs table.
///
/// Sentences not in the table get `fallback`. Sentences registered with
/// [`MockEvidenceSource::fail_on`] return an error, and those registered with
/// [`MockEvidenceSource::panic_on`] panic inside the future.
#[derive(Debug, Clone, Default)]
pub struct MockEvidenceSource {
    by_sentence: HashMap<String, Vec<String>>,
    fallback: Vec<String>,
    failing: HashSet<String>,
    panicking: HashSet<String>,
    calls: Arc<AtomicUsize>,
}

impl MockEvidenceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every sentence yields `urls`.
    pub fn with_fallback<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fallback: urls.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_sentence<I, S>(mut self, sentence: &str, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.by_sentence.insert(
            sentence.to_string(),
            urls.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn fail_on(mut self, sentence: &str) -> Self {
        self.failing.insert(sentence.to_string());
        self
    }

    pub fn panic_on(mut self, sentence: &str) -> Self {
        self.panicking.insert(sentence.to_string());
        self
    }

    /// Number of `candidates` calls seen so far, shared across clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EvidenceSource for MockEvidenceSource {
    async fn candidates(&self, sentence: &str) -> Result<Vec<String>, EvidenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.panicking.contains(sentence) {
            panic!("mock evidence source panicked on {sentence:?}");
        }
        if self.failing.contains(sentence) {
            return Err(EvidenceError::Unavailable {
                reason: format!("mock failure for {sentence:?}"),
            });
        }

        Ok(self
            .by_sentence
            .get(sentence)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}

/// Search provider returning a canned result, optionally after a delay.
#[derive(Debug, Clone)]
pub struct MockSearchProvider {
    name: &'static str,
    result: Result<Vec<String>, u16>,
    delay: Option<Duration>,
    queries: Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockSearchProvider {
    pub fn returning<I, S>(name: &'static str, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            result: Ok(urls.into_iter().map(Into::into).collect()),
            delay: None,
            queries: Arc::default(),
        }
    }

    /// Fails every search with an HTTP status error.
    pub fn failing(name: &'static str, status: u16) -> Self {
        Self {
            name,
            result: Err(status),
            delay: None,
            queries: Arc::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queries received so far, shared across clones.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("lock poisoned").clone()
    }
}

impl SearchProvider for MockSearchProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn search(&self, query: &str) -> Result<Vec<String>, EvidenceError> {
        self.queries
            .lock()
            .expect("lock poisoned")
            .push(query.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.result {
            Ok(urls) => Ok(urls.clone()),
            Err(status) => Err(EvidenceError::Status {
                provider: self.name,
                status: *status,
            }),
        }
    }
}
