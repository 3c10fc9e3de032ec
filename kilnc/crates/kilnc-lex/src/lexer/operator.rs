//! Operator and punctuation lexing.
//!
//! Every operator here takes at most one byte of lookahead past its first
//! byte, and always prefers the longer spelling.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles: `-`, `->`
    pub fn lex_minus(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b'>') {
            TokenKind::Arrow
        } else {
            TokenKind::Minus
        }
    }

    /// Handles: `*`, `**`
    pub fn lex_star(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b'*') {
            TokenKind::Power
        } else {
            TokenKind::Multiply
        }
    }

    /// Handles: `/`
    ///
    /// `//` never reaches this point; comments are consumed before dispatch.
    pub fn lex_slash(&mut self) -> TokenKind {
        self.cursor.advance();
        TokenKind::Divide
    }

    /// Handles: `=`, `==`, `=>`
    pub fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            TokenKind::Equal
        } else if self.cursor.match_byte(b'>') {
            TokenKind::Arrow
        } else {
            TokenKind::Assign
        }
    }

    /// Handles: `>`, `>=`
    pub fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        }
    }

    /// Handles: `<`, `<=`
    pub fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            TokenKind::LessEqual
        } else {
            TokenKind::Less
        }
    }

    /// Handles: `:`, `::`
    pub fn lex_colon(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b':') {
            TokenKind::DoubleColon
        } else {
            TokenKind::Colon
        }
    }

    /// Handles: `!`, `!=`
    pub fn lex_bang(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            TokenKind::NotEqual
        } else {
            TokenKind::Exclamation
        }
    }

    /// Handles: `|`, `|>`
    pub fn lex_pipe(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b'>') {
            TokenKind::PipeForward
        } else {
            TokenKind::Pipe
        }
    }

    /// Handles: `.`, `..`, `...`
    ///
    /// A fourth dot is left for the next token.
    pub fn lex_dot(&mut self) -> TokenKind {
        self.cursor.advance();
        if !self.cursor.match_byte(b'.') {
            return TokenKind::Dot;
        }
        if self.cursor.match_byte(b'.') {
            TokenKind::InclusiveRange
        } else {
            TokenKind::ExclusiveRange
        }
    }
}
