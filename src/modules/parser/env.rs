//! Environment variable substitution

use climate_core::ClimateError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex pattern for environment variable placeholders: {{ env.VAR_NAME }}
static ENV_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap()
});

/// Environment variable substitutor
///
/// Every referenced variable must be set; the error lists all missing names.
pub struct EnvSubstitutor;

impl EnvSubstitutor {
    pub fn new() -> Self {
        Self
    }

    /// Substitute environment variables in the given content
    pub fn substitute(&self, content: &str) -> Result<String, ClimateError> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let mut result = content.to_string();
        let mut missing: Vec<String> = Vec::new();

        for cap in ENV_PATTERN.captures_iter(content) {
            let placeholder = &cap[0];
            let var_name = &cap[1];

            match std::env::var(var_name) {
                Ok(value) => {
                    result = result.replace(placeholder, &value);
                }
                Err(_) => {
                    if !missing.iter().any(|m| m == var_name) {
                        missing.push(var_name.to_string());
                    }
                }
            }
        }

        if !missing.is_empty() {
            return Err(ClimateError::EnvVarNotFound(missing.join(", ")));
        }

        Ok(result)
    }

}

impl Default for EnvSubstitutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_with_env_var() {
        std::env::set_var("CLIMATE_TEST_DB_PATH", "/data/hawaii.sqlite");
        let substitutor = EnvSubstitutor::new();
        let result = substitutor
            .substitute("path: {{ env.CLIMATE_TEST_DB_PATH }}")
            .unwrap();
        assert_eq!(result, "path: /data/hawaii.sqlite");
        std::env::remove_var("CLIMATE_TEST_DB_PATH");
    }

    #[test]
    fn test_substitute_missing_var() {
        let substitutor = EnvSubstitutor::new();
        let result = substitutor.substitute("{{ env.NONEXISTENT_VAR_12345 }} {{ env.NONEXISTENT_VAR_12345 }}");
        match result {
            Err(ClimateError::EnvVarNotFound(names)) => {
                assert_eq!(names, "NONEXISTENT_VAR_12345");
            }
            other => panic!("expected EnvVarNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_content_without_placeholders_is_unchanged() {
        let content = "path: Resources/hawaii.sqlite\nnote: \"{{ inputs.start }}\"";
        let result = EnvSubstitutor::new().substitute(content).unwrap();
        assert_eq!(result, content);
    }
}
