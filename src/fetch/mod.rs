//! Candidate page download and text extraction.
//!
//! [`HttpFetcher`] downloads a page with browser-like headers under a hard
//! deadline and reduces it to text with [`clean_html`]. [`fetch_document`]
//! is the infallible entry point used by the check pipeline: any failure
//! (timeout, transport error, non-2xx status) yields an empty document.

pub mod clean;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use clean::clean_html;
pub use config::FetcherConfig;
pub use error::FetchError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockPageFetcher;

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::debug;

use crate::constants::{PAGE_ACCEPT, PAGE_ACCEPT_LANGUAGE};

/// Downloads a URL and returns its readable text.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Cleaned text of one candidate page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchedDocument {
    pub url: String,
    pub text: String,
    /// Length of `text` in characters.
    pub length: usize,
}

impl FetchedDocument {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self {
            url: url.into(),
            text,
            length,
        }
    }

    pub fn empty(url: impl Into<String>) -> Self {
        Self::new(url, String::new())
    }
}

/// Fetches `url` and never fails: errors become an empty document.
pub async fn fetch_document<F: PageFetcher>(fetcher: &F, url: &str) -> FetchedDocument {
    match fetcher.fetch(url).await {
        Ok(text) => FetchedDocument::new(url, text),
        Err(e) => {
            debug!(url, error = %e, "Candidate page unavailable");
            FetchedDocument::empty(url)
        }
    }
}

/// [`PageFetcher`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
    max_document_chars: usize,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(PAGE_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(PAGE_ACCEPT_LANGUAGE));

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            timeout: config.timeout,
            max_document_chars: config.max_document_chars,
        })
    }

    async fn download(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let html = tokio::time::timeout(self.timeout, self.download(url))
            .await
            .map_err(|_| FetchError::Timeout {
                url: url.to_string(),
                timeout_ms: self.timeout.as_millis() as u64,
            })??;

        Ok(clean_html(&html, self.max_document_chars))
    }
}
