//! Cross-cutting, shared constants.
//!
//! Every tunable of the check pipeline has its default here. Components read
//! these through their `*Config` types so that a deployment can override them
//! from the environment without touching call sites.
//!
//! # Calibration
//!
//! The thresholds and widths below were fixed empirically and have no formal
//! derivation. Keep the defaults unless a measurement shows miscalibration.

/// Sentences must be strictly longer than this (in characters) to be checked.
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 20;

/// Upper bound on sentences checked per request.
pub const DEFAULT_MAX_SENTENCES: usize = 20;

/// Sentences processed concurrently per batch.
pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Pause between consecutive sentence batches.
pub const DEFAULT_BATCH_PAUSE_MS: u64 = 500;

/// Page fetches in flight per sentence.
pub const DEFAULT_FETCH_CONCURRENCY: usize = 5;

/// Hard per-page fetch deadline.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 8_000;

/// Cleaned page text is truncated to this many characters before scoring.
pub const DEFAULT_MAX_DOCUMENT_CHARS: usize = 5_000;

/// Cleaned page text must be strictly longer than this to be scored.
pub const DEFAULT_MIN_DOCUMENT_CHARS: usize = 100;

/// Combined score a document must exceed to count as a source.
pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.15;

/// Best combined score a sentence must exceed to be flagged.
pub const DEFAULT_PLAGIARISM_THRESHOLD: f64 = 0.5;

/// Window length for phrase-overlap scoring.
pub const DEFAULT_NGRAM_SIZE: usize = 5;

/// Tokens of this many characters or fewer are dropped.
pub const MAX_SHORT_TOKEN_CHARS: usize = 2;

/// Candidate URLs kept per sentence after merging providers.
pub const DEFAULT_MAX_CANDIDATES: usize = 10;

/// Characters of the sentence sent to the web search surface.
pub const DEFAULT_WEB_QUERY_CHARS: usize = 200;

/// Characters of the sentence sent to the academic metadata API.
pub const DEFAULT_ACADEMIC_QUERY_CHARS: usize = 150;

/// Result links kept from one web search page.
pub const DEFAULT_WEB_MAX_RESULTS: usize = 8;

/// Row limit requested from the academic metadata API.
pub const DEFAULT_ACADEMIC_ROWS: usize = 5;

/// Deadline for a single search-provider request.
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

/// Default HTML search surface endpoint.
pub const DEFAULT_WEB_SEARCH_URL: &str = "https://html.duckduckgo.com/html/";

/// Host excluded from web search results (the search surface itself).
pub const DEFAULT_WEB_SEARCH_EXCLUDED_HOST: &str = "duckduckgo.com";

/// Default academic metadata endpoint.
pub const DEFAULT_ACADEMIC_SEARCH_URL: &str = "https://api.crossref.org/works";

/// Browser-like user agent sent to search surfaces and third-party pages.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// `Accept` header sent with page fetches.
pub const PAGE_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// `Accept-Language` header sent with page fetches.
pub const PAGE_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Minimum inbound text length accepted by the HTTP API.
pub const DEFAULT_MIN_TEXT_CHARS: usize = 100;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5005;
