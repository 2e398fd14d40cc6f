//! Store health check handler

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use climate_types::ErrorResponse;
use tracing::warn;

use crate::state::AppState;

/// Handler for GET /health
pub struct HealthHandler;

impl HealthHandler {
    /// Handle GET /health
    pub async fn handle(State(state): State<AppState>) -> Response {
        match state.executor.health_check().await {
            Ok(()) => (StatusCode::OK, "OK").into_response(),
            Err(e) => {
                warn!("Health check failed: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorResponse::new(e.sanitized_message())),
                )
                    .into_response()
            }
        }
    }
}
