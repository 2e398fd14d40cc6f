//! Type definitions for the climate API
//!
//! This crate contains the hand-declared record types mirroring the dataset's
//! tables and the JSON bodies returned by the HTTP routes.

pub mod record;
pub mod runtime;

pub use record::{Observation, Record, Station};
pub use runtime::{
    ErrorResponse, PrecipitationSeries, StationEntry, StationTemperatureReading,
    TemperatureReading, TemperatureSummary,
};
