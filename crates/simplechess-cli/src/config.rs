//! Configuration file loading for the command-line front end.
//!
//! Settings are read from `simplechess.toml` in the working directory, or
//! from the file given with `--config`. A missing file means defaults.

use serde::{Deserialize, Serialize};
use simplechess_core::{parse_position, Board, Color, FormatError, STARTPOS};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured start position is not a valid position string.
    #[error("Invalid start_position: {0}")]
    InvalidStartPosition(#[from] FormatError),
}

/// Front-end settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Position used when a command is given no `--position`.
    /// Defaults to the standard starting position.
    #[serde(default = "default_start_position")]
    pub start_position: String,
    /// Log filter directive used when `RUST_LOG` is unset. Defaults to "warn".
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Print JSON reports by default.
    #[serde(default)]
    pub json: bool,
}

fn default_start_position() -> String {
    STARTPOS.to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_position: default_start_position(),
            log_filter: default_log_filter(),
            json: false,
        }
    }
}

impl Config {
    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// # Errors
    ///
    /// See [`Self::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it contains invalid TOML, or
    /// [`ConfigError::InvalidStartPosition`] if `start_position` does not parse.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.start()?;
        Ok(config)
    }

    /// Returns the default path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("simplechess.toml")
    }

    /// Parses the configured start position.
    pub fn start(&self) -> Result<(Board, Color), FormatError> {
        parse_position(&self.start_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
start_position = "4k3/8/8/8/8/8/8/4K3 b"
log_filter = "simplechess_engine=debug"
json = true
"#;

        let config: Config = toml::from_str(toml_content).unwrap();

        assert_eq!(config.start_position, "4k3/8/8/8/8/8/8/4K3 b");
        assert_eq!(config.log_filter, "simplechess_engine=debug");
        assert!(config.json);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.start_position, STARTPOS);
        assert_eq!(config.log_filter, "warn");
        assert!(!config.json);
    }

    #[test]
    fn test_config_path_returns_expected_path() {
        assert_eq!(Config::config_path(), PathBuf::from("simplechess.toml"));
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("simplechess.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config("json = true\n");
        let config = Config::load_from(file.path()).unwrap();
        assert!(config.json);
        assert_eq!(config.start_position, STARTPOS);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let file = write_config("json = \n");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_rejects_invalid_start_position() {
        let file = write_config("start_position = \"8/8/8 w\"\n");
        match Config::load_from(file.path()) {
            Err(ConfigError::InvalidStartPosition(err)) => {
                assert_eq!(err, FormatError::InvalidRankCount(3));
            }
            other => panic!("Expected InvalidStartPosition, got {:?}", other),
        }
    }

    #[test]
    fn test_start_parses_configured_position() {
        let config = Config {
            start_position: "4k3/8/8/8/8/8/8/4K3 b".to_string(),
            ..Config::default()
        };
        let (board, side) = config.start().unwrap();
        assert_eq!(side, Color::Black);
        assert_eq!(board.occupied_count(), 2);
    }
}
