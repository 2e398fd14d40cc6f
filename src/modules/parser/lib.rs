//! Configuration parsing for the climate API
//!
//! This crate handles parsing of YAML configuration files, validation, and
//! environment variable substitution.

pub mod env;
pub mod validator;
pub mod yaml;

pub use validator::ConfigValidator;
pub use yaml::YamlParser;

use climate_core::{ClimateError, ServiceConfig};

/// Parse a configuration file from a path
pub fn parse_file(path: &str) -> Result<ServiceConfig, ClimateError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ClimateError::Config(format!("Failed to read file '{}': {}", path, e)))?;

    parse_string(&content)
}

/// Parse a configuration from a string
pub fn parse_string(content: &str) -> Result<ServiceConfig, ClimateError> {
    let config = YamlParser::parse(content)?;

    let validator = ConfigValidator::new();
    validator.validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_config() {
        let yaml = r#"
name: hawaii-climate
database:
  path: "Resources/hawaii.sqlite"
"#;
        let config = parse_string(yaml).unwrap();
        assert_eq!(config.name, "hawaii-climate");
        assert_eq!(config.database.path, "Resources/hawaii.sqlite");
        assert_eq!(config.port(), 5000);
    }

    #[test]
    fn test_parse_rejects_invalid_config() {
        let yaml = r#"
name: hawaii-climate
database:
  path: ""
"#;
        assert!(matches!(
            parse_string(yaml),
            Err(ClimateError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_file("/nonexistent/climate.yaml");
        assert!(matches!(result, Err(ClimateError::Config(_))));
    }
}
