//! Error handling module for the kilnt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use kilnc_lex::LexError;
use thiserror::Error;

/// Main error type for the kilnt CLI application.
#[derive(Error, Debug)]
pub enum KilntError {
    /// Error when the configuration cannot be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when the lexer cannot allocate its token buffer.
    #[error("Lexer error: {0}")]
    Lex(#[from] LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using KilntError.
pub type Result<T> = std::result::Result<T, KilntError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = KilntError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = KilntError::FileOperation("permission denied".to_string());
        assert_eq!(err.to_string(), "File operation failed: permission denied");
    }

    #[test]
    fn test_validation_error_display() {
        let err = KilntError::Validation("2 malformed token(s)".to_string());
        assert_eq!(err.to_string(), "Validation error: 2 malformed token(s)");
    }

    #[test]
    fn test_lex_error_conversion() {
        let reserve_err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let kilnt_err: KilntError = LexError::from(reserve_err).into();
        assert!(matches!(kilnt_err, KilntError::Lex(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let kilnt_err: KilntError = io_err.into();
        assert!(matches!(kilnt_err, KilntError::Io(_)));
    }
}
