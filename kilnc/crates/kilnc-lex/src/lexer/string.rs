//! String literal lexing.
//!
//! The lexeme keeps its quotes and escapes exactly as written; decoding the
//! escapes is left to later phases.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening `"`.
    ///
    /// A backslash consumes itself and the next byte whatever it is. Strings
    /// may span lines. Reaching the end of input before the closing quote
    /// still yields a `String` token covering the rest of the source.
    pub fn lex_string(&mut self) -> TokenKind {
        self.cursor.advance();

        while let Some(b) = self.cursor.advance() {
            match b {
                b'"' => break,
                b'\\' => {
                    // Clamped at end of input by `advance`.
                    self.cursor.advance();
                },
                _ => {},
            }
        }

        TokenKind::String
    }
}
