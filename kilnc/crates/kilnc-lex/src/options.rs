//! Lexer configuration.

use serde::{Deserialize, Serialize};

/// Which cursor position a token reports as its line/column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    /// Position of the token's first byte.
    #[default]
    Start,
    /// Position of the cursor just after the token's last byte.
    ///
    /// Matches the output of older Kiln tooling, which sampled the cursor
    /// after scanning.
    End,
}

/// Options controlling a tokenization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexOptions {
    #[serde(default)]
    pub position: PositionMode,
}

impl LexOptions {
    pub fn with_position(mut self, position: PositionMode) -> Self {
        self.position = position;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_start() {
        assert_eq!(LexOptions::default().position, PositionMode::Start);
    }

    #[test]
    fn test_with_position() {
        let options = LexOptions::default().with_position(PositionMode::End);
        assert_eq!(options.position, PositionMode::End);
    }
}
