//! Uniform error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use climate_core::ClimateError;
use climate_types::ErrorResponse;

/// Error returned by every JSON route
///
/// Renders as `{"error": "..."}` with the status the underlying error maps to.
#[derive(Debug)]
pub struct ApiError(pub ClimateError);

impl From<ClimateError> for ApiError {
    fn from(err: ClimateError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::new(self.0.sanitized_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let err = ApiError::from(ClimateError::NotFound("No stations found".into()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_query_fault_status() {
        let err = ApiError::from(ClimateError::QueryExecution("disk I/O error".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
