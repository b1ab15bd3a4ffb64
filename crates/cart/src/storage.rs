//! Durable key-value storage abstraction.
//!
//! The cart persists itself through this interface so the reducer and store
//! stay storage-agnostic. [`FileStorage`] is the durable client-side backend
//! (one JSON document per key under a data directory); [`MemoryStorage`]
//! backs tests and degraded sessions.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Storage operation failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (quota, permissions, missing directory).
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Key contains characters that cannot map to a storage entry.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// Key-value storage with string keys and string values.
///
/// Values are opaque to the storage layer; the persistence adapter decides
/// the document format.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read. A missing entry
    /// is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the entry under `key`. Deleting a missing entry is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be modified.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

// Lets callers lend a backend to a short-lived store (tests, CLI commands)
// without giving up ownership.
impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Volatile in-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: each key maps to `<dir>/<key>.json`.
///
/// Writes go through a temporary file and a rename so a crash mid-write
/// cannot leave a half-written document behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Keys become file names, so path separators and traversal are rejected.
    fn entry_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.contains("..");
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Whether a file entry exists for the given key.
#[must_use]
pub fn entry_exists(dir: &Path, key: &str) -> bool {
    dir.join(format!("{key}.json")).exists()
}
