//! Root service configuration

use serde::{Deserialize, Serialize};

use super::{DatabaseConfig, DatasetConfig, ServerConfig};

/// Root configuration that represents a climate API configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Name of the service
    pub name: String,

    /// Backing store
    pub database: DatabaseConfig,

    /// Dataset query settings (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetConfig>,

    /// Server configuration (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl ServiceConfig {
    /// Create a configuration with the given name and database file
    pub fn new(name: impl Into<String>, database_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database: DatabaseConfig::new(database_path),
            dataset: None,
            server: None,
        }
    }

    /// Get the server port, defaulting to 5000
    pub fn port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port.as_ref())
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000)
    }

    /// Get the log level, defaulting to 1 (INFO)
    pub fn log_level(&self) -> u8 {
        self.server
            .as_ref()
            .and_then(|s| s.log_level)
            .unwrap_or(1)
    }

    /// Get the dataset settings, falling back to defaults
    pub fn dataset(&self) -> DatasetConfig {
        self.dataset.clone().unwrap_or_default()
    }
}
