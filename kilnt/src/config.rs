//! Configuration module for the kilnt CLI.
//!
//! This module handles loading, saving, and locating the `kilnt.toml`
//! configuration file.

use dirs::{config_dir, home_dir};
use kilnc_lex::LexOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{KilntError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "kilnt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Options passed straight to the lexer.
    #[serde(default)]
    pub lex: LexOptions,

    /// Token dump settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Token dump configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// File written when `--output` is not given. Stdout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KilntError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            KilntError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            KilntError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("kilnt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("kilnt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kilnc_lex::PositionMode;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        Config {
            verbose: true,
            lex: LexOptions {
                position: PositionMode::End,
            },
            output: OutputConfig {
                format: OutputFormat::Json,
                path: Some(PathBuf::from("/tmp/tokens.json")),
            },
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.lex.position, PositionMode::Start);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.path.is_none());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("kilnt.toml");

        let original_config = create_test_config();
        original_config.save_to_path(&config_path).unwrap();

        let loaded_config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_default_config_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        Config::default().save_to_path(&config_path).unwrap();
        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[lex]\nposition = \"end\"\n").unwrap();
        assert_eq!(config.lex.position, PositionMode::End);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.verbose);
    }

    #[test]
    fn test_invalid_position_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[lex]\nposition = \"middle\"\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(KilntError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/kilnt.toml"));
        assert!(result.is_err());
    }
}
