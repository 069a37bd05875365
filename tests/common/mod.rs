//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;
pub mod mock_gateway;

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;
use ticketdesk::config::SecureString;
use ticketdesk::model::Ticket;
use ticketdesk::session::{MemoryTokenStore, TokenStore, TokenStoreError};
use ticketdesk::store::Store;

use mock_gateway::MockGateway;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Decode tickets from JSON, panicking on malformed fixtures.
pub fn tickets(value: serde_json::Value) -> Vec<Ticket> {
    serde_json::from_value(value).expect("invalid ticket fixture")
}

pub fn ticket(value: serde_json::Value) -> Ticket {
    serde_json::from_value(value).expect("invalid ticket fixture")
}

/// Two open tickets and one closed one.
pub fn sample_tickets() -> Vec<Ticket> {
    tickets(serde_json::json!([
        {"id": 1, "user": "u1", "title": "Login page broken", "create_date": "2024-01-01T09:00:00Z", "status": "O"},
        {"id": 2, "user": "u1", "title": "Dark mode", "create_date": "2024-01-02T09:00:00Z", "status": "O"},
        {"id": 3, "user": "u1", "title": "Typo", "create_date": "2023-12-01T09:00:00Z", "status": "C", "closed_date": "2023-12-02T09:00:00Z"}
    ]))
}

// -- Store helpers ------------------------------------------------------------

/// Store over a scripted gateway, signed in with `token`.
pub fn signed_in_store(
    gateway: MockGateway,
    token: &str,
) -> (Store<MockGateway>, MemoryTokenStore) {
    let tokens = MemoryTokenStore::with_token(token);
    let store = Store::new(gateway, Arc::new(tokens.clone()));
    (store, tokens)
}

/// Store over a scripted gateway with no stored token.
pub fn signed_out_store(gateway: MockGateway) -> (Store<MockGateway>, MemoryTokenStore) {
    let tokens = MemoryTokenStore::new();
    let store = Store::new(gateway, Arc::new(tokens.clone()));
    (store, tokens)
}

/// Token storage on a read-only medium: reads work, writes and erases fail.
pub struct ReadOnlyTokenStore {
    pub token: Option<String>,
}

impl TokenStore for ReadOnlyTokenStore {
    fn load(&self) -> Option<SecureString> {
        self.token.as_deref().map(SecureString::from)
    }

    fn save(&self, _token: &str) -> Result<(), TokenStoreError> {
        Err(TokenStoreError::Write {
            path: PathBuf::from("/readonly/token"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        Err(TokenStoreError::Remove {
            path: PathBuf::from("/readonly/token"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

/// Store over a scripted gateway whose token storage rejects writes.
pub fn read_only_store(gateway: MockGateway, token: Option<&str>) -> Store<MockGateway> {
    let tokens = ReadOnlyTokenStore {
        token: token.map(str::to_string),
    };
    Store::new(gateway, Arc::new(tokens))
}

/// At most one of error/success may be set after an action.
pub fn assert_single_notification(store: &Store<MockGateway>) {
    let state = store.snapshot();
    assert!(
        !(state.error.is_some() && state.success.is_some()),
        "both error and success set: {:?} / {:?}",
        state.error,
        state.success
    );
}
