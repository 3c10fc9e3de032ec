//! Check command implementation.
//!
//! Tokenizes each input and reports every `Unknown` and `Error` token. The
//! command fails when any are found.

use std::path::PathBuf;

use kilnc_lex::tokenize_with;
use tracing::{info, warn};

use crate::commands::common::{error_messages, read_source};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{KilntError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source files to check.
    pub inputs: Vec<PathBuf>,
    /// Settings from `kilnt.toml`.
    pub config: Config,
}

/// Totals gathered over every checked file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub files: usize,
    pub tokens: usize,
    pub soft_failures: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Scans every input and returns the totals, without failing on
    /// malformed tokens.
    pub fn scan(&self) -> Result<CheckReport> {
        if self.args.inputs.is_empty() {
            return Err(KilntError::Validation(error_messages::NO_INPUT_FILES.to_string()));
        }

        let mut report = CheckReport::default();
        for path in &self.args.inputs {
            let source = read_source(path)?;
            let tokens = tokenize_with(&source, self.args.config.lex)?;

            for token in tokens.iter().filter(|t| t.kind.is_soft_failure()) {
                warn!(
                    "{}:{}:{}: {} token {:?}",
                    path.display(),
                    token.line,
                    token.column,
                    token.kind,
                    token.text_lossy()
                );
                report.soft_failures += 1;
            }

            report.files += 1;
            report.tokens += tokens.len();
        }
        Ok(report)
    }

    /// Execute the command.
    pub fn run(&self) -> Result<CheckReport> {
        let report = self.scan()?;
        info!(
            files = report.files,
            tokens = report.tokens,
            soft_failures = report.soft_failures,
            "check finished"
        );

        if report.soft_failures > 0 {
            return Err(KilntError::Validation(format!(
                "{} malformed token(s) in {} file(s)",
                report.soft_failures, report.files
            )));
        }
        Ok(report)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<CheckReport> {
    tracing::debug!(command = CheckCommand::name(), "running command");
    CheckCommand::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_clean_file_passes() {
        let dir = TempDir::new().unwrap();
        let input = write(&dir, "ok.kiln", b"fun main() { return 0; }");

        let report = run_check(CheckArgs {
            inputs: vec![input],
            ..CheckArgs::default()
        })
        .unwrap();

        assert_eq!(report.files, 1);
        assert_eq!(report.soft_failures, 0);
        assert_eq!(report.tokens, 10);
    }

    #[test]
    fn test_soft_failures_are_counted() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.kiln", "let é = 1;".as_bytes());
        let b = write(&dir, "b.kiln", b"x @ y # z");

        let command = CheckCommand::new(CheckArgs {
            inputs: vec![a, b],
            ..CheckArgs::default()
        });
        let report = command.scan().unwrap();
        assert_eq!(report.files, 2);
        assert_eq!(report.soft_failures, 3);

        let err = command.run().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: 3 malformed token(s) in 2 file(s)"
        );
    }

    #[test]
    fn test_no_inputs() {
        let result = run_check(CheckArgs::default());
        assert!(matches!(result, Err(KilntError::Validation(_))));
    }
}
