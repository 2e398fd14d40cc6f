//! Configuration section types

use serde::{Deserialize, Serialize};

/// Station whose readings `/api/v1.0/tobs` serves by default
pub const DEFAULT_TOBS_STATION: &str = "USC00519281";

/// Default length of the trailing window, in days
pub const DEFAULT_WINDOW_DAYS: u32 = 365;

/// Longest accepted trailing window (about a century)
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// Backing store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file (supports environment variable substitution)
    pub path: String,
}

impl DatabaseConfig {
    /// Create a database configuration for the given file
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Check if the path contains environment variable placeholders
    pub fn has_env_placeholders(&self) -> bool {
        self.path.contains("{{") && self.path.contains("}}")
    }
}

/// Dataset-level query settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Length of the trailing window (default: 365)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_days: Option<u32>,

    /// Station served by `/api/v1.0/tobs` (default: USC00519281)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tobs_station: Option<String>,
}

impl DatasetConfig {
    /// Get the window length with default fallback
    pub fn window_days(&self) -> u32 {
        self.window_days.unwrap_or(DEFAULT_WINDOW_DAYS)
    }

    /// Get the `/tobs` station with default fallback
    pub fn tobs_station(&self) -> &str {
        self.tobs_station.as_deref().unwrap_or(DEFAULT_TOBS_STATION)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on (default: 5000)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    /// Log level: 0=DEBUG, 1=INFO, 2=WARN, 3=ERROR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_config_defaults() {
        let config = DatasetConfig::default();
        assert_eq!(config.window_days(), 365);
        assert_eq!(config.tobs_station(), "USC00519281");
    }

    #[test]
    fn test_dataset_config_overrides() {
        let config = DatasetConfig {
            window_days: Some(30),
            tobs_station: Some("USC00513117".to_string()),
        };
        assert_eq!(config.window_days(), 30);
        assert_eq!(config.tobs_station(), "USC00513117");
    }

    #[test]
    fn test_database_env_placeholders() {
        assert!(DatabaseConfig::new("{{ env.CLIMATE_DB_PATH }}").has_env_placeholders());
        assert!(!DatabaseConfig::new("Resources/hawaii.sqlite").has_env_placeholders());
    }
}
