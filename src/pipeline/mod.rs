//! The check pipeline.
//!
//! A document is segmented into sentences, which are processed in fixed-size
//! batches. Within a batch every sentence runs as its own task:
//!
//! 1. ask the [`EvidenceSource`] for candidate URLs,
//! 2. fetch the candidates through the [`PageFetcher`] with bounded
//!    concurrency,
//! 3. score each document and keep the relevant ones ([`select_matches`]).
//!
//! Batches are separated by a short pause to stay polite towards the search
//! providers. Results keep document order regardless of completion order,
//! and a failing or panicking sentence task degrades to a zero-evidence
//! result instead of aborting the check.

pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use config::PipelineConfig;
pub use error::PipelineError;

use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream;
use tracing::{Instrument, debug, info, instrument, warn};
use uuid::Uuid;

use crate::evidence::EvidenceSource;
use crate::fetch::{FetchedDocument, PageFetcher, fetch_document};
use crate::report::{PlagiarismReport, SentenceResult, SourceMatch, aggregate};
use crate::scoring::{SimilarityScore, to_percent};
use crate::text::{Sentence, segment_sentences};

/// Runs plagiarism checks against an evidence source and a page fetcher.
///
/// Cheap to clone; clones share the collaborators.
pub struct PlagiarismChecker<E, F> {
    evidence: Arc<E>,
    fetcher: Arc<F>,
    config: Arc<PipelineConfig>,
}

impl<E, F> Clone for PlagiarismChecker<E, F> {
    fn clone(&self) -> Self {
        Self {
            evidence: Arc::clone(&self.evidence),
            fetcher: Arc::clone(&self.fetcher),
            config: Arc::clone(&self.config),
        }
    }
}

impl<E, F> std::fmt::Debug for PlagiarismChecker<E, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlagiarismChecker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<E, F> PlagiarismChecker<E, F>
where
    E: EvidenceSource + 'static,
    F: PageFetcher + 'static,
{
    pub fn new(evidence: E, fetcher: F, config: PipelineConfig) -> Self {
        Self::from_shared(Arc::new(evidence), Arc::new(fetcher), config)
    }

    pub fn from_shared(evidence: Arc<E>, fetcher: Arc<F>, config: PipelineConfig) -> Self {
        Self {
            evidence,
            fetcher,
            config: Arc::new(config),
        }
    }

    /// Checks a whole document and returns its report.
    ///
    /// Never fails: unavailable evidence lowers scores instead.
    #[instrument(skip(self, text), fields(check_id = %Uuid::new_v4(), text_len = text.len()))]
    pub async fn check_text(&self, text: &str) -> PlagiarismReport {
        let sentences = segment_sentences(
            text,
            self.config.min_sentence_chars,
            self.config.max_sentences,
        );
        info!(sentences = sentences.len(), "Starting plagiarism check");

        let results = self.check_sentences(sentences).await;
        let report = aggregate(results);

        info!(
            overall_score = report.overall_score,
            plagiarism_percentage = report.plagiarism_percentage,
            plagiarized_sentences = report.plagiarized_sentences,
            "Plagiarism check finished"
        );
        report
    }

    /// Processes `sentences` batch by batch and returns one result per
    /// sentence, in input order.
    pub async fn check_sentences(&self, sentences: Vec<Sentence>) -> Vec<SentenceResult> {
        let batch_size = self.config.batch_size.max(1);
        let mut results = Vec::with_capacity(sentences.len());

        for (batch, group) in sentences.chunks(batch_size).enumerate() {
            if batch > 0 && !self.config.batch_pause.is_zero() {
                tokio::time::sleep(self.config.batch_pause).await;
            }
            debug!(batch, size = group.len(), "Processing sentence batch");

            let handles: Vec<_> = group
                .iter()
                .cloned()
                .map(|sentence| {
                    let checker = self.clone();
                    let task_sentence = sentence.clone();
                    let handle = tokio::spawn(
                        async move { checker.check_sentence(task_sentence).await }
                            .in_current_span(),
                    );
                    (sentence, handle)
                })
                .collect();

            for (sentence, handle) in handles {
                let outcome = match handle.await {
                    Ok(outcome) => outcome,
                    Err(join_err) => Err(PipelineError::TaskFailed {
                        reason: join_err.to_string(),
                    }),
                };

                let result = outcome.unwrap_or_else(|e| {
                    warn!(
                        sentence_index = sentence.index,
                        error = %e,
                        "Sentence check failed; reporting zero evidence"
                    );
                    SentenceResult::zero_evidence(sentence.index, sentence.text)
                });
                results.push(result);
            }
        }

        results
    }

    /// Retrieves, fetches and scores the evidence for one sentence.
    pub async fn check_sentence(&self, sentence: Sentence) -> Result<SentenceResult, PipelineError> {
        let urls = self.evidence.candidates(&sentence.text).await?;
        debug!(
            sentence_index = sentence.index,
            candidates = urls.len(),
            "Fetching candidate sources"
        );

        let fetches = urls.into_iter().map(|url| {
            let fetcher = Arc::clone(&self.fetcher);
            async move { fetch_document(fetcher.as_ref(), &url).await }
        });
        let documents: Vec<FetchedDocument> = stream::iter(fetches)
            .buffered(self.config.fetch_concurrency.max(1))
            .collect()
            .await;

        Ok(select_matches(&sentence, &documents, &self.config))
    }
}

/// Scores `documents` against `sentence` and builds the sentence result.
///
/// Documents not longer than `min_document_chars` are ignored. A document is
/// a match when its combined score is strictly above the relevance threshold.
/// The sentence score is the best match score (0 without matches), and
/// sources are ordered best first.
pub fn select_matches(
    sentence: &Sentence,
    documents: &[FetchedDocument],
    config: &PipelineConfig,
) -> SentenceResult {
    let mut matches: Vec<(&str, f64)> = documents
        .iter()
        .filter(|doc| doc.length > config.min_document_chars)
        .filter_map(|doc| {
            let score = SimilarityScore::between(&sentence.text, &doc.text, config.ngram_size);
            debug!(sentence_index = sentence.index, url = %doc.url, %score, "Scored document");
            score
                .exceeds(config.relevance_threshold)
                .then_some((doc.url.as_str(), score.combined))
        })
        .collect();

    matches.sort_by(|a, b| b.1.total_cmp(&a.1));

    let best_score = matches.first().map_or(0.0, |(_, score)| *score);
    let sources = matches
        .into_iter()
        .map(|(url, score)| SourceMatch::new(url, to_percent(score)))
        .collect();

    SentenceResult::new(
        sentence.index,
        sentence.text.clone(),
        best_score,
        sources,
        config.plagiarism_threshold,
    )
}
