//! Comment lexing.
//!
//! Line comments run from `//` up to, but not including, the next newline.
//! They are never emitted as tokens.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and line comments.
    ///
    /// Loops until the cursor rests on a byte that starts a real token, so a
    /// long run of comments costs no stack.
    pub fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.cursor.skip_whitespace();

            if self.cursor.peek_is(0, b'/') && self.cursor.peek_is(1, b'/') {
                self.skip_line_comment();
            } else {
                return;
            }
        }
    }

    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|b| b != b'\n');
    }
}
