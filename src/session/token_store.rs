//! Durable storage for the session token.
//!
//! Exactly one string is persisted, under a fixed key. Login and register
//! write it, logout and a failed verification erase it, and the gateway
//! reads it on every request.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use parking_lot::RwLock;
use thiserror::Error;

use crate::config::{SecureString, SessionConfig};

/// Errors raised by token persistence.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Failed to write token file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove token file '{path}': {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Key-value storage holding the single session token.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    fn load(&self) -> Option<SecureString>;

    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Erase the stored token. Erasing an absent token succeeds.
    fn clear(&self) -> Result<(), TokenStoreError>;
}

/// Token persisted as a single file named by the token key.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token at `dir/key`.
    pub fn new(dir: impl Into<PathBuf>, key: &str) -> Self {
        Self {
            path: dir.into().join(key),
        }
    }

    /// Build from session configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.resolved_token_dir(), &config.token_key)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn write_err(&self, source: std::io::Error) -> TokenStoreError {
        TokenStoreError::Write {
            path: self.path.clone(),
            source,
        }
    }

    /// Hold an exclusive lock on the sidecar lock file while `f` runs.
    fn with_lock<T>(
        &self,
        f: impl FnOnce() -> Result<T, TokenStoreError>,
    ) -> Result<T, TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
        }
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())
            .map_err(|e| self.write_err(e))?;
        FileExt::lock_exclusive(&lock).map_err(|e| self.write_err(e))?;
        let result = f();
        let _ = FileExt::unlock(&lock);
        result
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<SecureString> {
        let content = fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        if token.is_empty() {
            return None;
        }
        Some(SecureString::new(token.to_string()))
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        self.with_lock(|| {
            let tmp = self.path.with_extension("tmp");
            let mut file = File::create(&tmp).map_err(|e| self.write_err(e))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                file.set_permissions(fs::Permissions::from_mode(0o600))
                    .map_err(|e| self.write_err(e))?;
            }
            file.write_all(token.as_bytes())
                .and_then(|_| file.sync_all())
                .map_err(|e| self.write_err(e))?;
            fs::rename(&tmp, &self.path).map_err(|e| self.write_err(e))?;
            tracing::debug!(path = %self.path.display(), "Session token saved");
            Ok(())
        })
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        self.with_lock(|| match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Session token removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TokenStoreError::Remove {
                path: self.path.clone(),
                source: e,
            }),
        })
    }
}

/// In-process token storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already stored.
    pub fn with_token(token: &str) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(token.to_string()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<SecureString> {
        self.inner
            .read()
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(|t| SecureString::new(t.to_string()))
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.inner.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        *self.inner.write() = None;
        Ok(())
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn load(&self) -> Option<SecureString> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        (**self).clear()
    }
}
