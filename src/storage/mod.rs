//! Durable key-value storage for persisted resume state.
//!
//! The document store only needs three things from its backing medium:
//! read a value by key, overwrite it, and remove it. [`FileStorage`] keeps
//! one file per key on disk; [`MemoryStorage`] keeps everything in process.

mod file;
mod memory;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A byte-oriented key-value store.
pub trait KeyValueStorage {
    /// Returns the stored bytes, or `Ok(None)` if nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Overwrites the value stored under `key`.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).save(key, bytes)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Errors that can occur while reading or writing storage.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error for {}: {}", .0.display(), .1)]
    IoError(PathBuf, #[source] io::Error),

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Keys become file names, so they must be plain names.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("resume-setting").is_ok());
        assert!(validate_key("resume_setting.v2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("a/b").is_err());
    }

    #[test]
    fn test_invalid_key_message() {
        let err = validate_key("a/b").unwrap_err();
        assert_eq!(err.to_string(), "Invalid storage key 'a/b'");
    }

    #[test]
    fn test_storage_through_reference() {
        fn write_through<S: KeyValueStorage>(storage: S) {
            storage.save("k", b"v").unwrap();
        }

        let storage = MemoryStorage::new();
        write_through(&storage);
        assert_eq!(storage.load("k").unwrap(), Some(b"v".to_vec()));
    }
}
