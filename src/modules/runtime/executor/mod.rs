//! Query execution module
//!
//! Turns route parameters into store queries and shapes the rows into
//! response bodies. Empty results that the routes treat as errors come back
//! as [`ClimateError::NotFound`].

use climate_core::{ClimateError, DatasetConfig, TrailingWindow};
use climate_types::{
    PrecipitationSeries, StationEntry, StationTemperatureReading, TemperatureReading,
    TemperatureSummary,
};
use std::sync::Arc;
use tracing::debug;

use crate::store::{ClimateStore, TemperatureStats};

pub const NO_STATIONS: &str = "No stations found";
pub const NO_DATA_FOR_START: &str = "No data found for the given start date.";
pub const NO_DATA_FOR_RANGE: &str = "No data found for the given date range.";

/// Query executor over the shared store
pub struct QueryExecutor {
    store: Arc<dyn ClimateStore>,
    dataset: DatasetConfig,
}

impl QueryExecutor {
    /// Create a new query executor
    pub fn new(store: Arc<dyn ClimateStore>, dataset: DatasetConfig) -> Self {
        Self { store, dataset }
    }

    /// Window ending at the dataset's global maximum date
    ///
    /// `None` when the dataset has no observations at all.
    async fn trailing_window(&self) -> Result<Option<TrailingWindow>, ClimateError> {
        let Some(max_date) = self.store.max_date().await? else {
            return Ok(None);
        };
        let window = TrailingWindow::ending_at(&max_date, self.dataset.window_days())?;
        debug!("Trailing window {}..={}", window.start(), window.end());
        Ok(Some(window))
    }

    /// Precipitation per date over the trailing window
    pub async fn precipitation(&self) -> Result<PrecipitationSeries, ClimateError> {
        let mut series = PrecipitationSeries::new();
        let Some(window) = self.trailing_window().await? else {
            return Ok(series);
        };

        // Rows arrive in date order; a later row for the same date replaces the earlier one.
        for observation in self.store.observations_in(&window, None).await? {
            series.insert(observation.date, observation.prcp);
        }
        Ok(series)
    }

    /// Every station's id and name
    pub async fn stations(&self) -> Result<Vec<StationEntry>, ClimateError> {
        let stations = self.store.stations().await?;
        if stations.is_empty() {
            return Err(ClimateError::NotFound(NO_STATIONS.to_string()));
        }

        Ok(stations
            .into_iter()
            .map(|s| StationEntry {
                station_id: s.station,
                name: s.name,
            })
            .collect())
    }

    /// Temperature readings of the configured station over the trailing window
    ///
    /// The window comes from the global maximum date, not the station's own.
    pub async fn tobs(&self) -> Result<Vec<TemperatureReading>, ClimateError> {
        let Some(window) = self.trailing_window().await? else {
            return Ok(Vec::new());
        };

        let rows = self
            .store
            .observations_in(&window, Some(self.dataset.tobs_station()))
            .await?;

        Ok(rows
            .into_iter()
            .map(|o| TemperatureReading {
                date: o.date,
                temperature: o.tobs,
            })
            .collect())
    }

    /// Temperature readings of every station over the trailing window, with station names
    pub async fn tobs_with_stations(&self) -> Result<Vec<StationTemperatureReading>, ClimateError> {
        let Some(window) = self.trailing_window().await? else {
            return Ok(Vec::new());
        };

        let rows = self.store.named_observations_in(&window).await?;

        Ok(rows
            .into_iter()
            .map(|row| StationTemperatureReading {
                date: row.observation.date,
                temperature: row.observation.tobs,
                station: row.station_name,
            })
            .collect())
    }

    /// TMIN/TAVG/TMAX for every observation on or after `start`
    ///
    /// `start` is compared as a raw string; a malformed value simply matches nothing.
    pub async fn summary_from(&self, start: &str) -> Result<TemperatureSummary, ClimateError> {
        let stats = self
            .store
            .temperature_stats(start, None)
            .await?
            .ok_or_else(|| ClimateError::NotFound(NO_DATA_FOR_START.to_string()))?;

        Ok(summarize(start, None, stats))
    }

    /// TMIN/TAVG/TMAX for observations in `start..=end`
    pub async fn summary_between(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureSummary, ClimateError> {
        let stats = self
            .store
            .temperature_stats(start, Some(end))
            .await?
            .ok_or_else(|| ClimateError::NotFound(NO_DATA_FOR_RANGE.to_string()))?;

        Ok(summarize(start, Some(end), stats))
    }

    /// Check that the store still answers
    pub async fn health_check(&self) -> Result<(), ClimateError> {
        self.store.health_check().await
    }

    /// Station served by [`QueryExecutor::tobs`]
    pub fn tobs_station(&self) -> &str {
        self.dataset.tobs_station()
    }
}

fn summarize(start: &str, end: Option<&str>, stats: TemperatureStats) -> TemperatureSummary {
    TemperatureSummary {
        start_date: start.to_string(),
        end_date: end.map(str::to_string),
        tmin: stats.min,
        tavg: stats.avg,
        tmax: stats.max,
    }
}
