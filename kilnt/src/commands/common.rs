//! Common types and utilities for kilnt commands.

use std::borrow::Cow;
use std::path::Path;

use clap::ValueEnum;
use kilnc_lex::{PositionMode, Token};
use serde::{Deserialize, Serialize};

use crate::error::{KilntError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token dump formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Token: <KIND> (<lexeme>) at line <L>, col <C>` line per token
    #[default]
    Text,
    /// A JSON array of token records
    Json,
}

/// Serializable view of a token for JSON dumps.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    pub kind: &'static str,
    pub text: Cow<'a, str>,
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        Self {
            kind: token.kind.name(),
            text: token.text_lossy(),
            offset: token.offset,
            line: token.line,
            column: token.column,
        }
    }
}

/// Renders a token stream in the requested format.
pub fn render_tokens(tokens: &[Token<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for token in tokens {
                out.push_str(&token.to_string());
                out.push('\n');
            }
            Ok(out)
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            let mut out = serde_json::to_string_pretty(&records)?;
            out.push('\n');
            Ok(out)
        },
    }
}

// ============================================================================
// Argument Parsing
// ============================================================================

/// Parses a `--position` value.
pub fn parse_position(s: &str) -> std::result::Result<PositionMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "start" => Ok(PositionMode::Start),
        "end" => Ok(PositionMode::End),
        other => Err(format!("unknown position mode '{}' (expected start or end)", other)),
    }
}

// ============================================================================
// File Utilities
// ============================================================================

/// Reads a whole source file into memory.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(KilntError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(KilntError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    std::fs::read(path).map_err(|e| {
        KilntError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Error when a config file would be overwritten.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists:";
}

#[cfg(test)]
mod tests {
    use super::*;
    use kilnc_lex::tokenize;

    #[test]
    fn test_render_text() {
        let tokens = tokenize(b"a..b").unwrap();
        let out = render_tokens(&tokens, OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "Token: IDENTIFIER (a) at line 1, col 1\n\
             Token: EXCLUSIVE_RANGE (..) at line 1, col 2\n\
             Token: IDENTIFIER (b) at line 1, col 4\n\
             Token: EOF () at line 1, col 5\n"
        );
    }

    #[test]
    fn test_render_json() {
        let tokens = tokenize(b"x = 1.5").unwrap();
        let out = render_tokens(&tokens, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[2]["kind"], "FLOAT");
        assert_eq!(records[2]["text"], "1.5");
        assert_eq!(records[2]["offset"], 4);
        assert_eq!(records[2]["column"], 5);
        assert_eq!(records[3]["kind"], "EOF");
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("start"), Ok(PositionMode::Start));
        assert_eq!(parse_position("END"), Ok(PositionMode::End));
        assert!(parse_position("middle").is_err());
    }

    #[test]
    fn test_read_source_missing_file() {
        let result = read_source(Path::new("/nonexistent/file.kiln"));
        assert!(matches!(result, Err(KilntError::Validation(_))));
    }

    #[test]
    fn test_read_source_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = read_source(dir.path());
        assert!(matches!(result, Err(KilntError::Validation(_))));
    }
}
