//! Lex command implementation.
//!
//! Reads one source file, tokenizes it and writes the token dump to a file
//! or stdout.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use kilnc_lex::{tokenize_with, LexOptions, PositionMode};
use tracing::{debug, info};

use crate::commands::common::{read_source, render_tokens, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{KilntError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Source file to tokenize.
    pub input: PathBuf,
    /// Output file; falls back to the config, then stdout.
    pub output: Option<PathBuf>,
    /// Dump format override.
    pub format: Option<OutputFormat>,
    /// Position mode override.
    pub position: Option<PositionMode>,
    /// Settings from `kilnt.toml`.
    pub config: Config,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Effective lexer options: config, then command-line override.
    pub fn lex_options(&self) -> LexOptions {
        let options = self.args.config.lex;
        match self.args.position {
            Some(position) => options.with_position(position),
            None => options,
        }
    }

    fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.args.config.output.format)
    }

    fn output_path(&self) -> Option<PathBuf> {
        self.args
            .output
            .clone()
            .or_else(|| self.args.config.output.path.clone())
    }

    /// Execute the command and return the number of tokens written.
    pub fn run(&self) -> Result<usize> {
        let start_time = Instant::now();
        let source = read_source(&self.args.input)?;
        let tokens = tokenize_with(&source, self.lex_options())?;
        let rendered = render_tokens(&tokens, self.format())?;

        match self.output_path() {
            Some(path) => {
                std::fs::write(&path, rendered).map_err(|e| {
                    KilntError::FileOperation(format!(
                        "Failed to write {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                info!(
                    input = %self.args.input.display(),
                    output = %path.display(),
                    tokens = tokens.len(),
                    "wrote token dump"
                );
            },
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(rendered.as_bytes())?;
                handle.flush()?;
            },
        }

        debug!(elapsed_ms = start_time.elapsed().as_millis() as u64, "lex finished");
        Ok(tokens.len())
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs) -> Result<usize> {
    tracing::debug!(command = LexCommand::name(), "running command");
    LexCommand::new(args).execute()
}
