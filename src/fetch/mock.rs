//! In-memory page fetcher.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::PageFetcher;
use super::error::FetchError;

/// Serves canned page text by URL and records how many fetches overlap.
///
/// Unknown URLs and URLs registered with [`MockPageFetcher::fail_on`] fail
/// with [`FetchError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct MockPageFetcher {
    pages: HashMap<String, String>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    fetches: Arc<AtomicUsize>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, text: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), text.into());
        self
    }

    pub fn fail_on(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    /// Every fetch sleeps for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Highest number of concurrently running fetches observed.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl PageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(url) {
            return Err(FetchError::Unavailable {
                url: url.to_string(),
            });
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Unavailable {
                url: url.to_string(),
            })
    }
}
