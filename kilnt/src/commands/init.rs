//! Init command implementation.
//!
//! Writes a default `kilnt.toml` into a directory.

use std::path::PathBuf;

use tracing::info;

use crate::commands::common::error_messages;
use crate::commands::traits::Command;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{KilntError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to initialize (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Execute the command and return the path of the written file.
    pub fn run(&self) -> Result<PathBuf> {
        let target = self.args.path.clone().unwrap_or_else(|| PathBuf::from("."));

        if target.exists() && !target.is_dir() {
            return Err(KilntError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                target.display()
            )));
        }

        let config_path = target.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(KilntError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        info!(path = %config_path.display(), "created configuration");
        Ok(config_path)
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    tracing::debug!(command = InitCommand::name(), "running command");
    InitCommand::new(args).execute()
}
