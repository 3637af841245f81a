//! Plagiscan library crate (used by the server and integration tests).
//!
//! Checks a document for plagiarism by comparing each of its sentences with
//! candidate sources found on the web and in academic metadata.
//!
//! # Public API Surface
//!
//! ## Text and scoring (pure)
//! - [`tokenize`], [`is_stop_word`], [`segment_sentences`] - Text preparation
//! - [`cosine_similarity`], [`ngram_similarity`], [`SimilarityScore`] - Resemblance
//!
//! ## Network collaborators
//! - [`EvidenceSource`], [`EvidenceRetriever`], [`SearchProvider`] - Candidate discovery
//! - [`PageFetcher`], [`HttpFetcher`], [`fetch_document`] - Page download and cleaning
//!
//! ## Orchestration
//! - [`PlagiarismChecker`], [`PipelineConfig`] - Batched per-sentence checks
//! - [`aggregate`], [`PlagiarismReport`] - Document-level report
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod evidence;
pub mod fetch;
pub mod gateway;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{Config, ConfigError};
pub use evidence::{
    DefaultRetriever, EvidenceConfig, EvidenceError, EvidenceRetriever, EvidenceSource,
    SearchProvider, merge_candidates,
};
#[cfg(any(test, feature = "mock"))]
pub use evidence::{MockEvidenceSource, MockSearchProvider};
pub use fetch::{
    FetchError, FetchedDocument, FetcherConfig, HttpFetcher, PageFetcher, clean_html,
    fetch_document,
};
#[cfg(any(test, feature = "mock"))]
pub use fetch::MockPageFetcher;
pub use pipeline::{PipelineConfig, PipelineError, PlagiarismChecker, select_matches};
pub use report::{PlagiarismReport, SentenceResult, SourceMatch, aggregate};
pub use scoring::{SimilarityScore, cosine_similarity, ngram_similarity};
pub use text::{Sentence, is_stop_word, segment_sentences, tokenize};
