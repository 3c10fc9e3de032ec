//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a source buffer one byte at a time. It tracks line/column
//! information for diagnostics and token positions.
//!
//! The cursor never decodes UTF-8. Non-ASCII input is handed to the lexer as
//! raw bytes and classified there.

/// A cursor over an immutable source buffer.
///
/// `advance` is the only operation that mutates the cursor, and it moves
/// forward by exactly one byte. Every other operation is a pure peek.
///
/// # Example
///
/// ```
/// use kilnc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"let x = 42;");
///
/// assert_eq!(cursor.current(), Some(b'l'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some(b'e'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in bytes).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the cursor position, or `None` at end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use kilnc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"a");
    /// assert_eq!(cursor.current(), Some(b'a'));
    /// assert_eq!(Cursor::new(b"").current(), None);
    /// ```
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    /// Returns the byte `offset` positions ahead of the cursor without
    /// consuming anything.
    ///
    /// # Example
    ///
    /// ```
    /// use kilnc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"abc");
    /// assert_eq!(cursor.peek(0), Some(b'a'));
    /// assert_eq!(cursor.peek(2), Some(b'c'));
    /// assert_eq!(cursor.peek(3), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Returns true if the byte `offset` positions ahead equals `expected`.
    #[inline]
    pub fn peek_is(&self, offset: usize, expected: u8) -> bool {
        self.peek(offset) == Some(expected)
    }

    /// Consumes and returns the current byte.
    ///
    /// A newline increments the line and resets the column to 1; any other
    /// byte increments the column. At end of input this returns `None` and
    /// leaves the cursor untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use kilnc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"a\nb");
    /// assert_eq!(cursor.advance(), Some(b'a'));
    /// assert_eq!(cursor.advance(), Some(b'\n'));
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// assert_eq!(cursor.advance(), Some(b'b'));
    /// assert_eq!(cursor.advance(), None);
    /// ```
    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.current()?;
        self.position += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    /// Consumes the current byte if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use kilnc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"=>");
    /// assert!(cursor.match_byte(b'='));
    /// assert!(!cursor.match_byte(b'='));
    /// assert_eq!(cursor.current(), Some(b'>'));
    /// ```
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.peek_is(0, expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while let Some(b) = self.current() {
            if !predicate(b) {
                break;
            }
            self.advance();
        }
    }

    /// Skips whitespace bytes. Does NOT skip comments.
    ///
    /// # Example
    ///
    /// ```
    /// use kilnc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"  \t\nlet");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current(), Some(b'l'));
    /// ```
    pub fn skip_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the bytes from `start` up to the cursor position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.position]
    }

    /// Returns the whole source buffer.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }
}

/// Whitespace as the C `isspace` classification defines it.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}
