//! YAML configuration parser

use climate_core::{ClimateError, DatabaseConfig, DatasetConfig, ServerConfig, ServiceConfig};
use serde::Deserialize;

use crate::env::EnvSubstitutor;

/// YAML parser for climate API configuration files
pub struct YamlParser;

/// On-disk schema. Looser than [`ServiceConfig`] so that scalars such as
/// `port: 5000` can be written unquoted.
#[derive(Debug, Deserialize)]
struct RawConfig {
    name: String,

    database: RawDatabase,

    #[serde(default)]
    dataset: Option<RawDataset>,

    #[serde(default)]
    server: Option<RawServer>,
}

#[derive(Debug, Deserialize)]
struct RawDatabase {
    #[serde(default)]
    path: Option<String>,

    /// Alternate field name.
    #[serde(default)]
    file: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    window_days: Option<u32>,

    #[serde(default)]
    tobs_station: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    #[serde(default)]
    port: Option<serde_yaml::Value>,

    #[serde(default)]
    log_level: Option<u8>,
}

impl YamlParser {
    /// Parse a YAML string into a ServiceConfig
    pub fn parse(content: &str) -> Result<ServiceConfig, ClimateError> {
        let substitutor = EnvSubstitutor::new();
        let substituted = substitutor.substitute(content)?;

        Self::parse_raw(&substituted)
    }

    /// Parse a YAML string without environment variable substitution
    pub fn parse_raw(content: &str) -> Result<ServiceConfig, ClimateError> {
        let raw = serde_yaml::from_str::<RawConfig>(content)
            .map_err(|e| ClimateError::Config(format!("YAML parse error: {}", e)))?;
        raw_to_config(raw)
    }
}

fn raw_to_config(raw: RawConfig) -> Result<ServiceConfig, ClimateError> {
    let path = raw.database.path.or(raw.database.file).ok_or_else(|| {
        ClimateError::Config("Database section is missing 'path' (or 'file')".to_string())
    })?;

    let dataset = raw.dataset.map(|d| DatasetConfig {
        window_days: d.window_days,
        tobs_station: d.tobs_station,
    });

    let server = raw.server.map(|s| ServerConfig {
        port: s.port.and_then(yaml_scalar_to_string),
        log_level: s.log_level,
    });

    Ok(ServiceConfig {
        name: raw.name,
        database: DatabaseConfig::new(path),
        dataset,
        server,
    })
}

fn yaml_scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::Null => None,
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) => Some(s),
        other => serde_yaml::to_string(&other)
            .ok()
            .map(|s| s.trim().to_string()),
    }
}
