use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote ticket API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the ticket API (e.g., "http://localhost:5000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds. Zero disables the timeout.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Where the session token is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fixed key the token is stored under (the file name).
    #[serde(default = "default_token_key")]
    pub token_key: String,
    /// Directory holding the token file. Defaults to the platform data dir.
    #[serde(default)]
    pub token_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_token_key() -> String {
    "token".to_string()
}

impl SessionConfig {
    /// Resolve the directory the token file lives in.
    ///
    /// Uses `token_dir` when set, otherwise `<data_dir>/ticketdesk`,
    /// falling back to the current directory.
    pub fn resolved_token_dir(&self) -> PathBuf {
        match &self.token_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("ticketdesk"),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            token_dir: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            session: SessionConfig::default(),
        }
    }
}
