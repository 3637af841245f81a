use crate::text::tokenize;

use super::similarity::{cosine_from_tokens, ngram_from_tokens};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Resemblance between a sentence and one candidate document.
pub struct SimilarityScore {
    /// Bag-of-words signal (paraphrase).
    pub cosine: f64,
    /// Phrase-overlap signal (near-verbatim copying).
    pub ngram: f64,
    /// `max(cosine, ngram)`.
    pub combined: f64,
}

impl SimilarityScore {
    /// Builds a score from the two signals; `combined` is derived.
    pub fn new(cosine: f64, ngram: f64) -> Self {
        Self {
            cosine,
            ngram,
            combined: cosine.max(ngram),
        }
    }

    /// A score with both signals at zero.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Scores `sentence` against `document`, tokenizing each side once.
    pub fn between(sentence: &str, document: &str, ngram_size: usize) -> Self {
        let sentence_tokens = tokenize(sentence);
        let document_tokens = tokenize(document);

        Self::new(
            cosine_from_tokens(&sentence_tokens, &document_tokens),
            ngram_from_tokens(&sentence_tokens, &document_tokens, ngram_size),
        )
    }

    /// Returns `true` if `combined` strictly exceeds `threshold`.
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.combined > threshold
    }

    /// `combined` as a rounded percentage.
    pub fn percent(&self) -> u8 {
        to_percent(self.combined)
    }
}

impl std::fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "combined {:.4} (cosine {:.4}, ngram {:.4})",
            self.combined, self.cosine, self.ngram
        )
    }
}

/// Converts a score in `[0, 1]` to an integer percentage, rounding half up.
pub fn to_percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}
