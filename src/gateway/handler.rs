use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{Instrument, error, info, instrument};

use crate::evidence::EvidenceSource;
use crate::fetch::PageFetcher;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::CheckRequest;
use crate::gateway::state::HandlerState;
use crate::report::PlagiarismReport;

/// `POST /api/plagiarism-check`.
///
/// The check runs on its own task; only a panic inside it maps to a 500.
#[instrument(skip(state, payload), fields(text_chars = tracing::field::Empty))]
pub async fn plagiarism_check_handler<E, F>(
    State(state): State<HandlerState<E, F>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<PlagiarismReport>, GatewayError>
where
    E: EvidenceSource + 'static,
    F: PageFetcher + 'static,
{
    let Json(value) = payload.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let request: CheckRequest = serde_json::from_value(value)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;
    let text = request.validate(state.min_text_chars)?;
    tracing::Span::current().record("text_chars", text.chars().count());

    let checker = state.checker.clone();
    let report = tokio::spawn(async move { checker.check_text(&text).await }.in_current_span())
        .await
        .map_err(|e| {
            error!(error = %e, "Plagiarism check task failed");
            GatewayError::InternalError(e.to_string())
        })?;

    info!(
        total_sentences = report.total_sentences,
        overall_score = report.overall_score,
        "Plagiarism check served"
    );
    Ok(Json(report))
}
