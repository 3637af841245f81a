use std::time::Duration;

use crate::config::{ConfigError, env_parse_or};
use crate::constants::{
    DEFAULT_BATCH_PAUSE_MS, DEFAULT_BATCH_SIZE, DEFAULT_FETCH_CONCURRENCY, DEFAULT_MAX_SENTENCES,
    DEFAULT_MIN_DOCUMENT_CHARS, DEFAULT_MIN_SENTENCE_CHARS, DEFAULT_NGRAM_SIZE,
    DEFAULT_PLAGIARISM_THRESHOLD, DEFAULT_RELEVANCE_THRESHOLD,
};

/// Tunables of the check pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Sentences must be strictly longer than this (characters, trimmed).
    pub min_sentence_chars: usize,

    /// Only the first N qualifying sentences are checked.
    pub max_sentences: usize,

    /// Sentences processed concurrently per batch.
    pub batch_size: usize,

    /// Pause between consecutive batches. Not applied before the first.
    pub batch_pause: Duration,

    /// Concurrent page fetches within one sentence.
    pub fetch_concurrency: usize,

    /// Documents must be strictly longer than this to be scored.
    pub min_document_chars: usize,

    /// A document is a match only if its combined score is strictly above this.
    pub relevance_threshold: f64,

    /// A sentence is plagiarized only if its best score is strictly above this.
    pub plagiarism_threshold: f64,

    pub ngram_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: DEFAULT_MIN_SENTENCE_CHARS,
            max_sentences: DEFAULT_MAX_SENTENCES,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_pause: Duration::from_millis(DEFAULT_BATCH_PAUSE_MS),
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
            min_document_chars: DEFAULT_MIN_DOCUMENT_CHARS,
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            plagiarism_threshold: DEFAULT_PLAGIARISM_THRESHOLD,
            ngram_size: DEFAULT_NGRAM_SIZE,
        }
    }
}

impl PipelineConfig {
    const ENV_MIN_SENTENCE_CHARS: &'static str = "PLAGISCAN_MIN_SENTENCE_CHARS";
    const ENV_MAX_SENTENCES: &'static str = "PLAGISCAN_MAX_SENTENCES";
    const ENV_BATCH_SIZE: &'static str = "PLAGISCAN_BATCH_SIZE";
    const ENV_BATCH_PAUSE_MS: &'static str = "PLAGISCAN_BATCH_PAUSE_MS";
    const ENV_FETCH_CONCURRENCY: &'static str = "PLAGISCAN_FETCH_CONCURRENCY";
    const ENV_MIN_DOCUMENT_CHARS: &'static str = "PLAGISCAN_MIN_DOCUMENT_CHARS";
    const ENV_RELEVANCE_THRESHOLD: &'static str = "PLAGISCAN_RELEVANCE_THRESHOLD";
    const ENV_PLAGIARISM_THRESHOLD: &'static str = "PLAGISCAN_PLAGIARISM_THRESHOLD";
    const ENV_NGRAM_SIZE: &'static str = "PLAGISCAN_NGRAM_SIZE";

    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            min_sentence_chars: env_parse_or(
                Self::ENV_MIN_SENTENCE_CHARS,
                defaults.min_sentence_chars,
            ),
            max_sentences: env_parse_or(Self::ENV_MAX_SENTENCES, defaults.max_sentences),
            batch_size: env_parse_or(Self::ENV_BATCH_SIZE, defaults.batch_size),
            batch_pause: Duration::from_millis(env_parse_or(
                Self::ENV_BATCH_PAUSE_MS,
                DEFAULT_BATCH_PAUSE_MS,
            )),
            fetch_concurrency: env_parse_or(
                Self::ENV_FETCH_CONCURRENCY,
                defaults.fetch_concurrency,
            ),
            min_document_chars: env_parse_or(
                Self::ENV_MIN_DOCUMENT_CHARS,
                defaults.min_document_chars,
            ),
            relevance_threshold: env_parse_or(
                Self::ENV_RELEVANCE_THRESHOLD,
                defaults.relevance_threshold,
            ),
            plagiarism_threshold: env_parse_or(
                Self::ENV_PLAGIARISM_THRESHOLD,
                defaults.plagiarism_threshold,
            ),
            ngram_size: env_parse_or(Self::ENV_NGRAM_SIZE, defaults.ngram_size),
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_batch_pause(mut self, pause: Duration) -> Self {
        self.batch_pause = pause;
        self
    }

    pub fn with_fetch_concurrency(mut self, width: usize) -> Self {
        self.fetch_concurrency = width;
        self
    }

    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_sentences", self.max_sentences),
            ("batch_size", self.batch_size),
            ("fetch_concurrency", self.fetch_concurrency),
            ("ngram_size", self.ngram_size),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    name,
                    reason: "must be > 0".to_string(),
                });
            }
        }

        let thresholds = [
            ("relevance_threshold", self.relevance_threshold),
            ("plagiarism_threshold", self.plagiarism_threshold),
        ];
        for (name, value) in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    name,
                    reason: format!("must be within [0, 1], got {value}"),
                });
            }
        }

        Ok(())
    }
}
