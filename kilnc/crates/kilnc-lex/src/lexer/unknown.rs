//! Non-ASCII pass-through.
//!
//! Kiln source is ASCII. Any byte with the high bit set starts a run that is
//! handed to the parser as a single `Unknown` token. The run is not validated
//! as UTF-8.

use crate::token::TokenKind;
use crate::Lexer;

/// `10xx_xxxx`
#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

impl<'a> Lexer<'a> {
    /// Consumes a lead byte and every continuation byte after it.
    pub fn lex_non_ascii(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_while(is_continuation);
        tracing::trace!(
            len = self.cursor.position() - self.token_start,
            line = self.cursor.line(),
            "non-ASCII sequence"
        );
        TokenKind::Unknown
    }
}
