//! Command modules for the kilnt CLI.
//!
//! Each subcommand is implemented in its own file following the pattern in
//! [`traits`].

pub mod common;
pub mod traits;

pub mod check;
pub mod init;
pub mod lex;

pub use check::{run_check, CheckArgs};
pub use init::{run_init, InitArgs};
pub use lex::{run_lex, LexArgs};
