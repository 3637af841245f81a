use serde::{Deserialize, Serialize};

use crate::scoring::to_percent;

/// One candidate document that resembled a sentence above the relevance
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMatch {
    pub url: String,
    /// Combined score as a whole percentage.
    pub similarity: u8,
}

impl SourceMatch {
    pub fn new(url: impl Into<String>, similarity: u8) -> Self {
        Self {
            url: url.into(),
            similarity,
        }
    }
}

/// Outcome of checking one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceResult {
    /// Position among the retained sentences.
    #[serde(skip)]
    pub index: usize,

    pub sentence: String,

    #[serde(rename = "similarity")]
    pub similarity_percent: u8,

    /// Sorted by `similarity`, highest first.
    pub sources: Vec<SourceMatch>,

    pub is_plagiarized: bool,

    /// Best raw combined score; `is_plagiarized` is decided on this, not on
    /// the rounded percentage.
    #[serde(skip)]
    pub best_score: f64,
}

impl SentenceResult {
    pub fn new(
        index: usize,
        sentence: impl Into<String>,
        best_score: f64,
        sources: Vec<SourceMatch>,
        plagiarism_threshold: f64,
    ) -> Self {
        Self {
            index,
            sentence: sentence.into(),
            similarity_percent: to_percent(best_score),
            sources,
            is_plagiarized: best_score > plagiarism_threshold,
            best_score,
        }
    }

    /// Result for a sentence with no usable evidence (or whose pipeline
    /// failed).
    pub fn zero_evidence(index: usize, sentence: impl Into<String>) -> Self {
        Self {
            index,
            sentence: sentence.into(),
            similarity_percent: 0,
            sources: Vec::new(),
            is_plagiarized: false,
            best_score: 0.0,
        }
    }
}

/// Document-level summary returned by the check endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismReport {
    /// Rounded mean of the per-sentence percentages.
    pub overall_score: u8,

    /// Rounded share of plagiarized sentences, 0-100.
    pub plagiarism_percentage: u8,

    pub total_sentences: usize,

    pub plagiarized_sentences: usize,

    /// In input sentence order.
    pub results: Vec<SentenceResult>,
}

impl PlagiarismReport {
    pub fn empty() -> Self {
        Self {
            overall_score: 0,
            plagiarism_percentage: 0,
            total_sentences: 0,
            plagiarized_sentences: 0,
            results: Vec::new(),
        }
    }
}
