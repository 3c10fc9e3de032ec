//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, TokenKind};
use crate::Lexer;

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with an ASCII letter or underscore, followed by
    /// ASCII alphanumerics or underscores. The finished lexeme is checked
    /// against the reserved-word table.
    pub fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        keyword_from_ident(text).unwrap_or(TokenKind::Identifier)
    }
}
