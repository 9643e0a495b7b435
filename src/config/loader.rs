use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, StorageBackend};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/creaturemon/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("creaturemon").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The logging filter is not empty
    /// - The JSON backend has a file to write to
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Logging filter must not be empty".to_string(),
            });
        }

        if self.storage.backend == StorageBackend::Json {
            match self.storage.resolved_path() {
                None => {
                    return Err(ConfigError::ValidationError {
                        message: "JSON storage needs a path and no data directory is available"
                            .to_string(),
                    });
                }
                Some(path) if path.as_os_str().is_empty() => {
                    return Err(ConfigError::ValidationError {
                        message: "JSON storage path must not be empty".to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::StorageConfig;
    use crate::mvi::{EffectMode, UnknownActionPolicy};

    #[test]
    fn empty_document_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.pipeline.unknown_action, UnknownActionPolicy::Recover);
        assert_eq!(config.pipeline.effects, EffectMode::Background);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn parses_every_section() {
        let config: Config = toml::from_str(
            r#"
[storage]
backend = "json"
path = "/tmp/creatures.json"

[pipeline]
unknown_action = "fatal"
effects = "immediate"

[logging]
filter = "creaturemon=debug"
"#,
        )
        .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Json);
        assert_eq!(
            config.storage.resolved_path(),
            Some(PathBuf::from("/tmp/creatures.json"))
        );
        assert_eq!(config.pipeline.unknown_action, UnknownActionPolicy::Fatal);
        assert_eq!(config.pipeline.effects, EffectMode::Immediate);
        assert_eq!(config.logging.filter, "creaturemon=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_filter_is_rejected() {
        let mut config = Config::default();
        config.logging.filter = "  ".to_string();

        match config.validate().unwrap_err() {
            ConfigError::ValidationError { message } => {
                assert!(message.contains("Logging filter"));
            }
            other => panic!("Expected ValidationError, got: {other:?}"),
        }
    }

    #[test]
    fn empty_json_path_is_rejected() {
        let config = Config {
            storage: StorageConfig {
                backend: StorageBackend::Json,
                path: Some(PathBuf::new()),
            },
            ..Config::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn unknown_backend_fails_to_parse() {
        let result: Result<Config, _> = toml::from_str("[storage]\nbackend = \"sqlite\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn config_path_ends_with_expected() {
        assert!(Config::config_path().ends_with("creaturemon/config.toml"));
    }
}
