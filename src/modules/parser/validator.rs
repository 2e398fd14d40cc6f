//! Configuration validation

use climate_core::{ClimateError, ServiceConfig, MAX_WINDOW_DAYS};
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex pattern for valid names (lower-kebab-case or lower_snake_case)
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(?:[-_][a-z0-9]+)*$").unwrap()
});

/// Highest accepted log level (3=ERROR)
const MAX_LOG_LEVEL: u8 = 3;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate the entire configuration
    pub fn validate(&self, config: &ServiceConfig) -> Result<(), ClimateError> {
        self.validate_name(&config.name)?;
        self.validate_database(config)?;
        self.validate_dataset(config)?;
        self.validate_server(config)?;
        Ok(())
    }

    fn validate_name(&self, name: &str) -> Result<(), ClimateError> {
        if name.is_empty() {
            return Err(ClimateError::Validation(
                "Service name cannot be empty".to_string(),
            ));
        }

        if !NAME_PATTERN.is_match(name) {
            return Err(ClimateError::Validation(format!(
                "Invalid service name '{}': must be lower-kebab-case or lower_snake_case",
                name
            )));
        }

        Ok(())
    }

    fn validate_database(&self, config: &ServiceConfig) -> Result<(), ClimateError> {
        if config.database.path.trim().is_empty() {
            return Err(ClimateError::Validation(
                "Database path cannot be empty".to_string(),
            ));
        }

        if config.database.has_env_placeholders() {
            return Err(ClimateError::Validation(format!(
                "Database path '{}' still contains an unresolved placeholder",
                config.database.path
            )));
        }

        Ok(())
    }

    fn validate_dataset(&self, config: &ServiceConfig) -> Result<(), ClimateError> {
        let Some(dataset) = &config.dataset else {
            return Ok(());
        };

        if let Some(days) = dataset.window_days {
            if days == 0 || days > MAX_WINDOW_DAYS {
                return Err(ClimateError::Validation(format!(
                    "dataset.window_days must be between 1 and {}, got {}",
                    MAX_WINDOW_DAYS, days
                )));
            }
        }

        if matches!(&dataset.tobs_station, Some(s) if s.trim().is_empty()) {
            return Err(ClimateError::Validation(
                "dataset.tobs_station cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_server(&self, config: &ServiceConfig) -> Result<(), ClimateError> {
        let Some(server) = &config.server else {
            return Ok(());
        };

        if let Some(port) = &server.port {
            if port.parse::<u16>().is_err() {
                return Err(ClimateError::Validation(format!(
                    "Invalid server port '{}'",
                    port
                )));
            }
        }

        if let Some(level) = server.log_level {
            if level > MAX_LOG_LEVEL {
                return Err(ClimateError::Validation(format!(
                    "Invalid log_level {}: expected 0-{}",
                    level, MAX_LOG_LEVEL
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climate_core::{DatasetConfig, ServerConfig};

    fn valid_config() -> ServiceConfig {
        ServiceConfig::new("hawaii-climate", "Resources/hawaii.sqlite")
    }

    #[test]
    fn test_valid_config() {
        let validator = ConfigValidator::new();
        assert!(validator.validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_invalid_name() {
        let mut config = valid_config();
        config.name = "Hawaii Climate".to_string();

        assert!(ConfigValidator::new().validate(&config).is_err());
    }

    #[test]
    fn test_unresolved_database_placeholder() {
        let config = ServiceConfig::new("test", "{{ env.CLIMATE_DB_PATH }}");
        let result = ConfigValidator::new().validate(&config);
        assert!(result.unwrap_err().to_string().contains("unresolved placeholder"));
    }

    #[test]
    fn test_zero_window_rejected() {
        let mut config = valid_config();
        config.dataset = Some(DatasetConfig {
            window_days: Some(0),
            tobs_station: None,
        });
        let result = ConfigValidator::new().validate(&config);
        assert!(result.unwrap_err().to_string().contains("window_days"));
    }

    #[test]
    fn test_window_bounds() {
        let mut config = valid_config();
        config.dataset = Some(DatasetConfig {
            window_days: Some(u32::MAX),
            tobs_station: None,
        });
        let result = ConfigValidator::new().validate(&config);
        assert!(result.unwrap_err().to_string().contains("window_days"));

        config.dataset = Some(DatasetConfig {
            window_days: Some(MAX_WINDOW_DAYS),
            tobs_station: None,
        });
        assert!(ConfigValidator::new().validate(&config).is_ok());
    }

    #[test]
    fn test_blank_station_rejected() {
        let mut config = valid_config();
        config.dataset = Some(DatasetConfig {
            window_days: None,
            tobs_station: Some("  ".to_string()),
        });
        assert!(ConfigValidator::new().validate(&config).is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut config = valid_config();
        config.server = Some(ServerConfig {
            port: Some("70000".to_string()),
            log_level: None,
        });
        let result = ConfigValidator::new().validate(&config);
        assert!(result.unwrap_err().to_string().contains("Invalid server port"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = valid_config();
        config.server = Some(ServerConfig {
            port: None,
            log_level: Some(7),
        });
        assert!(ConfigValidator::new().validate(&config).is_err());
    }
}
