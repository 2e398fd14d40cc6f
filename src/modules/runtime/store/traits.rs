//! Store trait definition

use async_trait::async_trait;
use climate_core::{ClimateError, TrailingWindow};
use climate_types::{Observation, Station};
use serde_json::Number;

/// Observation joined with its station's display name
#[derive(Debug, Clone, PartialEq)]
pub struct NamedObservation {
    pub observation: Observation,
    pub station_name: String,
}

/// MIN/AVG/MAX of `tobs` over a non-empty set of rows
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureStats {
    pub min: Number,
    pub avg: f64,
    pub max: Number,
}

/// Read-only access to the climate dataset
///
/// One instance is opened at startup and shared by every request handler.
/// Implementations never write.
#[async_trait]
pub trait ClimateStore: Send + Sync {
    /// Latest `date` across all observations, `None` if there are none
    async fn max_date(&self) -> Result<Option<String>, ClimateError>;

    /// Observations whose date lies in `window`, ordered by date ascending
    ///
    /// # Arguments
    /// * `window` - Inclusive date bounds
    /// * `station` - Restrict to one station when set
    async fn observations_in(
        &self,
        window: &TrailingWindow,
        station: Option<&str>,
    ) -> Result<Vec<Observation>, ClimateError>;

    /// Observations in `window` joined to their station, ordered by date ascending
    async fn named_observations_in(
        &self,
        window: &TrailingWindow,
    ) -> Result<Vec<NamedObservation>, ClimateError>;

    /// Every station
    async fn stations(&self) -> Result<Vec<Station>, ClimateError>;

    /// Temperature aggregate over `start <= date` (and `date <= end` when given)
    ///
    /// Bounds are compared as raw strings. Returns `None` when no row matches.
    async fn temperature_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<Option<TemperatureStats>, ClimateError>;

    /// Release the underlying connection
    async fn close(&self) -> Result<(), ClimateError>;

    /// Check if the connection is healthy
    async fn health_check(&self) -> Result<(), ClimateError>;

    /// Get the backend name
    fn backend(&self) -> &'static str;
}
