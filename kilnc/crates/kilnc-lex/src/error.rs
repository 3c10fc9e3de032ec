//! Error types for the lexer.
//!
//! Malformed input never produces an error; it is reported in-band through
//! `TokenKind::Unknown` and `TokenKind::Error` tokens. The only failure a
//! caller has to handle is running out of memory while the token buffer grows.

use std::collections::TryReserveError;

use thiserror::Error;

/// Fatal lexer failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The output token buffer could not grow.
    #[error("failed to allocate token buffer: {0}")]
    Alloc(#[from] TryReserveError),
}

/// Result type alias using LexError.
pub type Result<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_error_conversion() {
        let reserve_err = Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err();
        let err: LexError = reserve_err.into();
        assert!(matches!(err, LexError::Alloc(_)));
        assert!(err.to_string().starts_with("failed to allocate token buffer"));
    }
}
