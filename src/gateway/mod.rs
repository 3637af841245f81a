//! HTTP gateway (Axum) for the plagiarism check API.
//!
//! This module is primarily used by the `plagiscan` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use error::{ErrorResponse, GatewayError};
pub use handler::plagiarism_check_handler;
pub use payload::CheckRequest;
pub use state::HandlerState;

use crate::evidence::EvidenceSource;
use crate::fetch::PageFetcher;

/// Response header carrying a short outcome label.
pub const PLAGISCAN_STATUS_HEADER: &str = "x-plagiscan-status";

pub const CHECK_ROUTE: &str = "/api/plagiarism-check";

pub fn create_router_with_state<E, F>(state: HandlerState<E, F>, cors_origins: &[String]) -> Router
where
    E: EvidenceSource + 'static,
    F: PageFetcher + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route(CHECK_ROUTE, post(plagiarism_check_handler::<E, F>))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for browser clients: `GET`/`POST` with a `Content-Type` header.
///
/// An empty list allows any origin. Origins that are not valid header values
/// are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(PLAGISCAN_STATUS_HEADER, HeaderValue::from_static("healthy"));

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
        .into_response()
}
