use thiserror::Error;

use crate::evidence::EvidenceError;

/// Failure of one sentence pipeline.
///
/// [`super::PlagiarismChecker::check_text`] replaces any of these with a
/// zero-evidence result for that sentence.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("evidence retrieval failed: {0}")]
    Evidence(#[from] EvidenceError),

    #[error("sentence task failed: {reason}")]
    TaskFailed { reason: String },
}
