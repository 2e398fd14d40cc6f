//! Response bodies for the HTTP routes

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

/// Precipitation keyed by date
///
/// Keys are ISO dates, so iteration order is chronological. Inserting the
/// same date twice keeps the last value.
pub type PrecipitationSeries = BTreeMap<String, Option<Number>>;

/// Entry in the station listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationEntry {
    pub station_id: String,
    pub name: String,
}

/// Dated temperature reading for a single station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub date: String,
    pub temperature: Option<Number>,
}

/// Dated temperature reading with the reporting station's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationTemperatureReading {
    pub date: String,
    pub temperature: Option<Number>,
    pub station: String,
}

/// Min/avg/max temperature over a date filter
///
/// `End Date` is only present for bounded ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    #[serde(rename = "Start Date")]
    pub start_date: String,

    #[serde(rename = "End Date", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(rename = "TMIN")]
    pub tmin: Number,

    #[serde(rename = "TAVG")]
    pub tavg: f64,

    #[serde(rename = "TMAX")]
    pub tmax: Number,
}

/// Error body shared by every JSON route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Create an error body with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
