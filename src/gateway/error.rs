//! Error types for gateway calls.
//!
//! Every failure the store sees is one of these; the store only ever
//! surfaces the server-supplied message (if any) or its own fallback.

use thiserror::Error;

/// Errors that can occur while talking to the ticket API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Network-level failure (DNS, connect, reset).
    #[error("Request to '{path}' failed: {message}")]
    Transport { path: String, message: String },

    /// Request exceeded the configured timeout.
    #[error("Request to '{path}' timed out")]
    Timeout { path: String },

    /// The API answered with a non-success status.
    #[error("API returned {status} for '{path}'{}", message_suffix(.message))]
    Api {
        path: String,
        status: u16,
        message: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from '{path}': {reason}")]
    Decode { path: String, reason: String },
}

impl GatewayError {
    pub(crate) fn from_reqwest(path: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout {
                path: path.to_string(),
            }
        } else {
            GatewayError::Transport {
                path: path.to_string(),
                message: err.to_string(),
            }
        }
    }

    /// Human-readable message supplied by the server, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message shown to the user: the server's message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}

/// Pull a human-readable message out of an error body.
///
/// Looks at `message`, then `error` (string), then `error.message`.
pub(crate) fn extract_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let candidate = value
        .get("message")
        .and_then(|m| m.as_str())
        .or_else(|| value.get("error").and_then(|e| e.as_str()))
        .or_else(|| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
        })?;
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
