use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Largest avatar size Gravatar serves.
const MAX_AVATAR_SIZE: u32 = 2048;

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
    /// Uses `~/.config/signup-loop/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("signup-loop").join("config.toml")
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
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
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
    /// - The avatar base URL is http(s)
    /// - The avatar size is within 1..=2048
    /// - Timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let avatar = &self.avatar;

        if !(avatar.base_url.starts_with("http://") || avatar.base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("Avatar base_url '{}' must be http(s)", avatar.base_url),
            });
        }

        if avatar.size == 0 || avatar.size > MAX_AVATAR_SIZE {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Avatar size {} out of range 1..={}",
                    avatar.size, MAX_AVATAR_SIZE
                ),
            });
        }

        if avatar.timeout_seconds == 0 || avatar.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Avatar timeouts must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}
