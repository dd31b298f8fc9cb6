//! Durable key-value storage backends.
//!
//! The cart/favorites store mirrors each of its collections to one string
//! key after every mutation and reads those keys back once when it is
//! opened. Backends are the library-process analog of browser local storage:
//! small, synchronous, string-valued.
//!
//! A backend failure is never fatal to the session; callers log it and keep
//! their in-memory state authoritative.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use thiserror::Error;

/// Errors surfaced by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (disk full, permissions, ...).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be mapped to a storage location.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A synchronous string key-value store.
///
/// Writes are fire-and-forget from the caller's perspective: the store
/// keeps its in-memory state authoritative and only logs failures.
pub trait StorageBackend: Send {
    /// Read the value stored under `key`, `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read at all;
    /// an absent key is `Ok(None)`, never an error.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the value cannot be persisted.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the removal itself fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// A shared backend is still a backend; lets a session hand the same storage
// to a re-opened store (reload semantics).
impl<B: StorageBackend + ?Sized + Sync> StorageBackend for std::sync::Arc<B> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
