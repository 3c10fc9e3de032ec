//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the per-byte dispatch.

use tracing::trace;

use crate::cursor::Cursor;
use crate::options::{LexOptions, PositionMode};
use crate::token::{Token, TokenKind};

/// Lexer for the Kiln programming language.
///
/// The lexer turns a source buffer into tokens one call at a time. It never
/// fails: bytes that start no token come back as `TokenKind::Error` or
/// `TokenKind::Unknown` tokens, and every call consumes at least one byte
/// until the end of input is reached.
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub cursor: Cursor<'a>,

    options: LexOptions,

    /// Starting position of the current token (byte offset).
    pub token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Set once the iterator has handed out the end of input.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source bytes.
    pub fn new(source: &'a [u8]) -> Self {
        Self::with_options(source, LexOptions::default())
    }

    /// Creates a new lexer with explicit options.
    pub fn with_options(source: &'a [u8], options: LexOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            exhausted: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and line comments, then dispatches on the current
    /// byte. Once the input is exhausted every further call returns an empty
    /// `TokenKind::Eof` token.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let Some(b) = self.cursor.current() else {
            return self.make_token(TokenKind::Eof);
        };

        let kind = match b {
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b'[' => self.single(TokenKind::LBracket),
            b']' => self.single(TokenKind::RBracket),
            b';' => self.single(TokenKind::Semicolon),
            b',' => self.single(TokenKind::Comma),
            b'+' => self.single(TokenKind::Plus),
            b'%' => self.single(TokenKind::Modulo),
            b'$' => self.single(TokenKind::Dollar),
            b'^' => self.single(TokenKind::Caret),
            b'&' => self.single(TokenKind::Ampersand),
            b'-' => self.lex_minus(),
            b'*' => self.lex_star(),
            b'/' => self.lex_slash(),
            b'=' => self.lex_equals(),
            b'>' => self.lex_greater(),
            b'<' => self.lex_less(),
            b':' => self.lex_colon(),
            b'!' => self.lex_bang(),
            b'|' => self.lex_pipe(),
            b'.' => self.lex_dot(),
            b'"' => self.lex_string(),
            b if b.is_ascii_digit() => self.lex_number(),
            b if b.is_ascii_alphabetic() || b == b'_' => self.lex_identifier(),
            b if !b.is_ascii() => self.lex_non_ascii(),
            b => {
                trace!(
                    byte = b,
                    line = self.token_start_line,
                    column = self.token_start_column,
                    "unrecognised byte"
                );
                self.single(TokenKind::Error)
            },
        };

        self.make_token(kind)
    }

    /// Consumes one byte and returns `kind`.
    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Builds a token spanning `token_start` up to the cursor.
    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        let (line, column) = match self.options.position {
            PositionMode::Start => (self.token_start_line, self.token_start_column),
            PositionMode::End => (self.cursor.line(), self.cursor.column()),
        };
        Token {
            kind,
            text: self.cursor.slice_from(self.token_start),
            offset: self.token_start,
            line,
            column,
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn options(&self) -> LexOptions {
        self.options
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every token before the end of input.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.exhausted = true;
            None
        } else {
            Some(token)
        }
    }
}
