//! Error types for the climate API

use thiserror::Error;

/// Main error type for climate API operations
#[derive(Error, Debug)]
pub enum ClimateError {
    /// Configuration file parsing error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database connection error
    #[error("Database error: {0}")]
    Database(String),

    /// The store does not have the tables/columns the records declare
    #[error("Schema mismatch: {0}")]
    Schema(String),

    /// Query execution error
    #[error("Query execution failed: {0}")]
    QueryExecution(String),

    /// A query matched no rows where rows are required
    #[error("{0}")]
    NotFound(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// Environment variable not found
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClimateError {
    /// Returns true if this error should be logged at error level
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            ClimateError::Database(_)
                | ClimateError::Schema(_)
                | ClimateError::QueryExecution(_)
                | ClimateError::Server(_)
        )
    }

    /// Returns the appropriate HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ClimateError::NotFound(_) => 404,
            ClimateError::Validation(_) => 400,
            _ => 500,
        }
    }

    /// Message suitable for a response body
    ///
    /// Connection failures can carry file paths, so they are replaced with a
    /// generic message. Query faults are passed through.
    pub fn sanitized_message(&self) -> String {
        match self {
            ClimateError::Database(_) => "Database connection error".to_string(),
            _ => self.to_string(),
        }
    }
}
