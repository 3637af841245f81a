use thiserror::Error;

/// Failures while gathering candidate source URLs.
///
/// These never reach the HTTP caller: the retriever downgrades a failing
/// provider to an empty contribution, and the pipeline downgrades a failing
/// evidence source to a zero-evidence sentence.
#[derive(Debug, Error)]
pub enum EvidenceError {
    #[error("{provider} request failed: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned HTTP {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("{provider} response could not be decoded: {reason}")]
    Decode {
        provider: &'static str,
        reason: String,
    },

    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    /// Raised by the in-memory test sources in `mock.rs`. The HTTP providers
    /// report real failures through the variants above.
    #[error("evidence source unavailable: {reason}")]
    Unavailable { reason: String },
}
