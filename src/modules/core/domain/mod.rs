//! Domain models for the climate API

mod config;
mod types;
mod window;

pub use config::ServiceConfig;
pub use types::{
    DatabaseConfig, DatasetConfig, ServerConfig, DEFAULT_TOBS_STATION, DEFAULT_WINDOW_DAYS,
    MAX_WINDOW_DAYS,
};
pub use window::{TrailingWindow, DATE_FORMAT};
