use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "TICKETDESK_API_URL";

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
    /// Uses `~/.config/ticketdesk/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("ticketdesk").join("config.toml")
    }

    /// Loads configuration from the default config file, then applies
    /// the `TICKETDESK_API_URL` override.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_path())?;
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url(url)?;
        }
        Ok(config)
    }

    /// Loads configuration from an explicit path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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

    /// Replace the API base URL and re-validate.
    pub fn apply_api_url(&mut self, url: String) -> Result<(), ConfigError> {
        self.api.base_url = url;
        self.validate()
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API base URL is an http(s) URL
    /// - The token key is a plain, non-empty file name
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url '{}' must start with http:// or https://", url),
            });
        }

        let key = &self.session.token_key;
        if key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "session.token_key must not be empty".to_string(),
            });
        }
        if key.contains('/') || key.contains('\\') || key == "." || key == ".." {
            return Err(ConfigError::ValidationError {
                message: format!("session.token_key '{}' must be a plain file name", key),
            });
        }

        Ok(())
    }
}
