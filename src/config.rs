//! Game configuration loaded from TOML.

use crate::snapshot::DEFAULT_SAVE_PREFIX;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Prefix added to the board file name when saving.
    #[serde(default = "default_save_prefix")]
    save_prefix: String,

    /// Print the how-to-play banner before the first turn.
    #[serde(default = "default_show_instructions")]
    show_instructions: bool,
}

fn default_save_prefix() -> String {
    DEFAULT_SAVE_PREFIX.to_string()
}

fn default_show_instructions() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_prefix: default_save_prefix(),
            show_instructions: default_show_instructions(),
        }
    }
}

impl GameConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(save_prefix = %config.save_prefix, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.save_prefix(), "out-");
        assert!(*config.show_instructions());
    }

    #[test]
    fn test_overrides() {
        let config =
            GameConfig::from_toml("save_prefix = \"saved-\"\nshow_instructions = false\n")
                .unwrap();
        assert_eq!(config.save_prefix(), "saved-");
        assert!(!*config.show_instructions());
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(GameConfig::from_toml("save_prefix = 3").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = GameConfig::load_or_default("no/such/config.toml").unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
