//! Bearer token persistence.
//!
//! The backend issues one bearer token per session; the client keeps it in a
//! single logical slot. `FileTokenStore` is the durable implementation (one
//! token per file, restricted permissions); `MemoryTokenStore` backs tests
//! and short-lived embeddings.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors that can occur reading or writing the token slot.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// Filesystem operation failed.
    #[error("token store I/O error at {path}: {source}")]
    Io {
        /// Path of the token file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Storage for the session bearer token.
///
/// Implementations hold at most one token and must report an empty stored
/// value as absent. Token contents are opaque; nothing validates their shape
/// locally.
pub trait TokenStore: Send + Sync {
    /// Read the current token. Called on every authorized request, so
    /// implementations must not cache across calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get(&self) -> Result<Option<SecretString>, TokenStoreError>;

    /// Replace the slot contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written.
    fn set(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Empty the slot. Idempotent: clearing an empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written.
    fn clear(&self) -> Result<(), TokenStoreError>;
}

// =============================================================================
// FileTokenStore
// =============================================================================

/// Token slot backed by a single file.
///
/// The file is re-read on every `get`, so an external change (another
/// process signing in or out) is picked up by the very next request. Written
/// with mode 0600 on unix. Surrounding whitespace is trimmed on read so a
/// hand-edited file with a trailing newline still works.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store for the given token file. The file itself is only
    /// created on the first `set`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the token file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> TokenStoreError {
        TokenStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<SecretString>, TokenStoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_err(e)),
        };
        let token = contents.trim();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(SecretString::from(token.to_string())))
    }

    fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }

        // Restrict permissions where the platform supports it
        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;

            let mut file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .map_err(|e| self.io_err(e))?;
            file.write_all(token.as_bytes())
                .map_err(|e| self.io_err(e))?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(&self.path, token).map_err(|e| self.io_err(e))?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_err(e)),
        }
    }
}

// =============================================================================
// MemoryTokenStore
// =============================================================================

/// In-memory token slot.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<SecretString>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<SecretString>, TokenStoreError> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slot
            .as_ref()
            .filter(|token| !token.expose_secret().is_empty())
            .cloned())
    }

    fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(SecretString::from(token.to_string()));
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileTokenStore {
        FileTokenStore::new(dir.path().join("token"))
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.get().unwrap().is_none());
        store.set("tok-abc123").unwrap();
        assert_eq!(store.get().unwrap().unwrap().expose_secret(), "tok-abc123");
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("deeper").join("token"));

        store.set("tok").unwrap();
        assert_eq!(store.get().unwrap().unwrap().expose_secret(), "tok");
    }

    #[test]
    fn test_file_store_empty_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("").unwrap();
        assert!(store.get().unwrap().is_none());

        std::fs::write(store.path(), "\n  \n").unwrap();
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn test_file_store_trims_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "tok-xyz\n").unwrap();
        assert_eq!(store.get().unwrap().unwrap().expose_secret(), "tok-xyz");
    }

    #[test]
    fn test_file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("tok").unwrap();
        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_sees_external_writes() {
        // Every get re-reads the file; a rotation by another process is
        // visible immediately.
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("tok-old").unwrap();
        assert_eq!(store.get().unwrap().unwrap().expose_secret(), "tok-old");

        std::fs::write(store.path(), "tok-new").unwrap();
        assert_eq!(store.get().unwrap().unwrap().expose_secret(), "tok-new");
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("tok").unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::new();

        assert!(store.get().unwrap().is_none());
        store.set("tok").unwrap();
        assert_eq!(store.get().unwrap().unwrap().expose_secret(), "tok");

        store.set("").unwrap();
        assert!(store.get().unwrap().is_none());

        store.set("tok2").unwrap();
        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
    }
}
