//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator, dot and range lexing
//! - `comment` - Whitespace and comment skipping
//! - `unknown` - Non-ASCII pass-through

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;
mod unknown;

pub use core::Lexer;
