//! Candidate source discovery.
//!
//! For each sentence, two providers are queried concurrently:
//! - [`WebSearchProvider`] scrapes result links out of an HTML search page.
//! - [`AcademicSearchProvider`] reads work URLs from an academic metadata API.
//!
//! [`EvidenceRetriever`] merges both lists (web first), removes duplicates and
//! caps the result. A failing provider contributes nothing; it never fails the
//! sentence.

pub mod academic;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod web;


pub use academic::{AcademicSearchProvider, parse_work_urls};
pub use config::EvidenceConfig;
pub use error::EvidenceError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockEvidenceSource, MockSearchProvider};
pub use web::{WebSearchProvider, extract_redirect_targets};

use std::collections::HashSet;
use std::future::Future;

use reqwest::Client;
use tracing::{debug, warn};

/// A single search backend that maps a query to candidate URLs.
pub trait SearchProvider: Send + Sync {
    /// Short label used in logs and errors.
    fn name(&self) -> &'static str;

    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<String>, EvidenceError>> + Send;
}

/// Produces the candidate source URLs for one sentence.
pub trait EvidenceSource: Send + Sync {
    fn candidates(
        &self,
        sentence: &str,
    ) -> impl Future<Output = Result<Vec<String>, EvidenceError>> + Send;
}

/// Queries a web provider and an academic provider and merges their results.
#[derive(Debug, Clone)]
pub struct EvidenceRetriever<W, A> {
    web: W,
    academic: A,
    max_candidates: usize,
}

/// Retriever wired to the real HTTP providers.
pub type DefaultRetriever = EvidenceRetriever<WebSearchProvider, AcademicSearchProvider>;

impl<W: SearchProvider, A: SearchProvider> EvidenceRetriever<W, A> {
    pub fn new(web: W, academic: A, max_candidates: usize) -> Self {
        Self {
            web,
            academic,
            max_candidates,
        }
    }
}

impl DefaultRetriever {
    /// Builds both providers over one shared HTTP client.
    pub fn from_config(config: &EvidenceConfig) -> Result<Self, EvidenceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| EvidenceError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self::new(
            WebSearchProvider::new(client.clone(), config),
            AcademicSearchProvider::new(client, config),
            config.max_candidates,
        ))
    }
}

impl<W: SearchProvider, A: SearchProvider> EvidenceSource for EvidenceRetriever<W, A> {
    async fn candidates(&self, sentence: &str) -> Result<Vec<String>, EvidenceError> {
        let (web, academic) = tokio::join!(self.web.search(sentence), self.academic.search(sentence));

        let web = settle(self.web.name(), web);
        let academic = settle(self.academic.name(), academic);
        let (web_count, academic_count) = (web.len(), academic.len());

        let merged = merge_candidates([web, academic], self.max_candidates);
        debug!(
            web = web_count,
            academic = academic_count,
            merged = merged.len(),
            "Collected candidate sources"
        );
        Ok(merged)
    }
}

fn settle(provider: &'static str, result: Result<Vec<String>, EvidenceError>) -> Vec<String> {
    match result {
        Ok(urls) => urls,
        Err(e) => {
            warn!(provider, error = %e, "Search provider failed; continuing without it");
            Vec::new()
        }
    }
}

/// Concatenates `lists` in order, keeps the first occurrence of each URL and
/// truncates to `cap`.
pub fn merge_candidates<I>(lists: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut seen = HashSet::new();
    lists
        .into_iter()
        .flatten()
        .filter(|url| seen.insert(url.clone()))
        .take(cap)
        .collect()
}

/// Longest prefix of `text` with at most `max_chars` characters.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
