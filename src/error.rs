//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// User input rejected before any state change
    #[error("Validation error: {0}")]
    Validation(String),

    /// Stored snapshot could not be read or parsed
    #[error("Could not read saved transactions: {0}")]
    PersistenceRead(String),

    /// Snapshot could not be written; the in-memory list is still current
    #[error("Could not save transactions: {0}")]
    PersistenceWrite(String),

    /// No unused transaction id is left
    #[error("Cannot add more transactions: {0}")]
    IdsExhausted(String),
}

impl FintrackError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FintrackError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error() {
        let err = FintrackError::Validation("Description is required".into());
        assert_eq!(err.to_string(), "Validation error: Description is required");
        assert!(err.is_validation());
    }

    #[test]
    fn test_persistence_error_display() {
        let err = FintrackError::PersistenceWrite("disk full".into());
        assert_eq!(err.to_string(), "Could not save transactions: disk full");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FintrackError = io_err.into();
        assert!(matches!(err, FintrackError::Io(_)));
    }
}
