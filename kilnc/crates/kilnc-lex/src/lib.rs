//! kilnc-lex - Lexical Analyzer for the Kiln Programming Language
//!
//! This crate turns a Kiln source buffer into a flat sequence of classified
//! tokens. It is the first phase of the compiler and feeds the parser.
//!
//! # Example Usage
//!
//! ```
//! use kilnc_lex::{tokenize, Lexer, TokenKind};
//!
//! let source = b"let x = 1..5;";
//! let tokens = tokenize(source).unwrap();
//! assert_eq!(tokens[3].kind, TokenKind::Integer);
//! assert_eq!(tokens[4].kind, TokenKind::ExclusiveRange);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//!
//! // Or pull tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token().kind, TokenKind::KwLet);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, the token value and the reserved-word table
//! - [`lexer`] - Lexer implementation
//! - [`cursor`] - Byte cursor for source traversal
//! - [`options`] - Tokenization options
//! - [`error`] - Fatal error type
//!
//! # Token Categories
//!
//! **Punctuation**: `(` `)` `{` `}` `[` `]` `;` `,`
//!
//! **Operators**: `+` `-` `*` `/` `%` `**` `->` `=>` `=` `==` `!=` `>` `>=`
//! `<` `<=` `^` `&` `$` `|` `|>` `!` `:` `::` `.` `..` `...`
//!
//! **Literals**: integers (`42`), floats (`3.14`), strings (`"a\"b"`),
//! booleans (`true`, `false`)
//!
//! **Keywords**: `const let var if else while for return fun process message
//! impl spawn bool import as in struct enum union trait match mut str8 strA
//! str16 str32 stringA string string16 string32 generic typealias`
//!
//! **Special**: `Eof`, `Unknown` (non-ASCII run), `Error` (stray byte)
//!
//! Comments start with `//` and run to the end of the line.
//!
//! # Lifetimes
//!
//! Tokens borrow their lexeme from the source buffer, so the buffer must
//! outlive every token produced from it.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod options;
pub mod token;

mod edge_cases;

use tracing::{debug, trace_span};

pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use lexer::Lexer;
pub use options::{LexOptions, PositionMode};
pub use token::{keyword_from_ident, Token, TokenKind};

/// Tokenizes `input` with default options.
///
/// The returned vector always ends with exactly one `TokenKind::Eof` token.
/// Fails only if the vector cannot grow.
pub fn tokenize(input: &[u8]) -> Result<Vec<Token<'_>>> {
    tokenize_with(input, LexOptions::default())
}

/// Tokenizes `input` with explicit options.
pub fn tokenize_with(input: &[u8], options: LexOptions) -> Result<Vec<Token<'_>>> {
    let _span = trace_span!("tokenize", len = input.len()).entered();

    let mut lexer = Lexer::with_options(input, options);
    let mut tokens = Vec::new();
    tokens.try_reserve(input.len() / 4 + 1)?;

    let mut soft_failures = 0usize;
    loop {
        let token = lexer.next_token();
        if token.kind.is_soft_failure() {
            soft_failures += 1;
        }
        tokens.try_reserve(1)?;
        tokens.push(token);
        if token.is_eof() {
            break;
        }
    }

    debug!(
        bytes = input.len(),
        tokens = tokens.len(),
        soft_failures,
        "tokenized source"
    );
    Ok(tokens)
}
