use thiserror::Error;

/// Failures while downloading a candidate page.
///
/// [`super::fetch_document`] folds all of these into an empty document; they
/// surface only in debug logs and in direct [`super::PageFetcher`] calls.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    /// Raised by `MockPageFetcher` for failing or unknown pages.
    /// `HttpFetcher` reports real failures through the variants above.
    #[error("page unavailable: {url}")]
    Unavailable { url: String },
}
