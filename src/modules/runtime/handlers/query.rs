//! Dataset query handlers

use axum::{
    extract::{Path, State},
    Json,
};
use climate_core::ClimateError;
use climate_types::{
    PrecipitationSeries, StationEntry, StationTemperatureReading, TemperatureReading,
    TemperatureSummary,
};
use tracing::{error, info};

use super::error::ApiError;
use crate::state::AppState;

/// Handlers for the `/api/v1.0` routes
pub struct QueryHandler;

impl QueryHandler {
    /// Handle GET /api/v1.0/precipitation
    pub async fn precipitation(
        State(state): State<AppState>,
    ) -> Result<Json<PrecipitationSeries>, ApiError> {
        let result = state.executor.precipitation().await;
        respond("precipitation", result, PrecipitationSeries::len)
    }

    /// Handle GET /api/v1.0/stations
    pub async fn stations(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<StationEntry>>, ApiError> {
        let result = state.executor.stations().await;
        respond("stations", result, Vec::len)
    }

    /// Handle GET /api/v1.0/tobs
    pub async fn tobs(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<TemperatureReading>>, ApiError> {
        let result = state.executor.tobs().await;
        respond("tobs", result, Vec::len)
    }

    /// Handle GET /api/v1.0/tobs_with_stations
    pub async fn tobs_with_stations(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<StationTemperatureReading>>, ApiError> {
        let result = state.executor.tobs_with_stations().await;
        respond("tobs_with_stations", result, Vec::len)
    }

    /// Handle GET /api/v1.0/{start}
    pub async fn summary_from(
        State(state): State<AppState>,
        Path(start): Path<String>,
    ) -> Result<Json<TemperatureSummary>, ApiError> {
        let result = state.executor.summary_from(&start).await;
        summarize_outcome(&format!("{}..", start), result)
    }

    /// Handle GET /api/v1.0/{start}/{end}
    pub async fn summary_between(
        State(state): State<AppState>,
        Path((start, end)): Path<(String, String)>,
    ) -> Result<Json<TemperatureSummary>, ApiError> {
        let result = state.executor.summary_between(&start, &end).await;
        summarize_outcome(&format!("{}..={}", start, end), result)
    }
}

/// Log the outcome of a summary route and convert it into a response
fn summarize_outcome(
    range: &str,
    result: Result<TemperatureSummary, ClimateError>,
) -> Result<Json<TemperatureSummary>, ApiError> {
    match result {
        Ok(summary) => {
            info!("Temperature summary served for {}", range);
            Ok(Json(summary))
        }
        Err(e) => Err(log_failure(&format!("summary {}", range), e)),
    }
}

/// Log the outcome of a route and convert it into a response
fn respond<T>(
    route: &str,
    result: Result<T, ClimateError>,
    count: impl Fn(&T) -> usize,
) -> Result<Json<T>, ApiError> {
    match result {
        Ok(body) => {
            info!("Route '{}' served {} entries", route, count(&body));
            Ok(Json(body))
        }
        Err(e) => Err(log_failure(route, e)),
    }
}

fn log_failure(route: &str, e: ClimateError) -> ApiError {
    if e.is_error() {
        error!("Route '{}' failed: {}", route, e);
    } else {
        info!("Route '{}' returned no data: {}", route, e);
    }
    ApiError(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::Number;

    #[test]
    fn test_summary_outcome_passes_body_through() {
        let summary = TemperatureSummary {
            start_date: "2017-08-23".to_string(),
            end_date: Some("2017-08-23".to_string()),
            tmin: Number::from(79),
            tavg: 79.0,
            tmax: Number::from(79),
        };
        let Json(body) = summarize_outcome("2017-08-23..=2017-08-23", Ok(summary.clone())).unwrap();
        assert_eq!(body, summary);
    }

    #[test]
    fn test_summary_outcome_keeps_not_found() {
        let err = summarize_outcome(
            "2017-08-24..",
            Err(ClimateError::NotFound("No data found for the given start date.".into())),
        )
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
