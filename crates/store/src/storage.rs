//! Key-value storage backends.
//!
//! [`KeyValueStorage`] is a string-to-string store addressed by key. Two
//! backends are provided:
//!
//! - [`FileStorage`] keeps one JSON file per key in a base directory and
//!   survives restarts.
//! - [`MemoryStorage`] keeps values in-process; it backs tests and sessions
//!   where no data directory could be created.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.local/share/taskflow/       # Linux
//! ~/Library/Application Support/taskflow/  # macOS
//! └── storage/
//!     └── {key}.json
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::error::{Result, StorageError};

/// Returns `true` if `key` is non-empty, does not start with `.`, and only
/// contains ASCII letters, digits, `_`, `-` and `.`.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn check_key(key: &str) -> Result<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// A string key-value store.
pub trait KeyValueStorage {
    /// Returns the value stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be
    /// written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the value under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be
    /// written.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// File-backed storage: one `<key>.json` file per key.
///
/// # Examples
///
/// ```no_run
/// use taskflow_store::{FileStorage, KeyValueStorage};
///
/// # fn example() -> taskflow_store::Result<()> {
/// let mut storage = FileStorage::with_path("/tmp/taskflow-storage")?;
/// storage.set("greeting", "\"hello\"")?;
/// assert_eq!(storage.get("greeting")?.as_deref(), Some("\"hello\""));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[instrument(skip_all)]
    pub fn with_path(base_path: impl AsRef<Path>) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        debug!(?base_path, "opening file storage");

        if !base_path.exists() {
            debug!(?base_path, "creating storage directory");
            fs::create_dir_all(&base_path).map_err(|e| StorageError::io(&base_path, e))?;
        }

        Ok(Self { base_path })
    }

    /// Returns the storage directory.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        let path = self.entry_path(key);

        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(?path, bytes = content.len(), "read storage entry");
                Ok(Some(content))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "storage entry not found");
                Ok(None)
            }
            Err(e) => {
                warn!(?path, error = %e, "failed to read storage entry");
                Err(StorageError::io(path, e))
            }
        }
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        let path = self.entry_path(key);
        let tmp = self.base_path.join(format!(".{key}.json.tmp"));

        fs::write(&tmp, value).map_err(|e| StorageError::io(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::io(path, e));
        }

        debug!(?path, "storage entry written");
        Ok(())
    }

    #[instrument(skip(self))]
    fn remove(&mut self, key: &str) -> Result<()> {
        check_key(key)?;
        let path = self.entry_path(key);

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(?path, "storage entry removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }
}

/// In-process storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        check_key(key)?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn key_validation() {
        assert!(is_valid_key("tm_tasks_v1"));
        assert!(is_valid_key("a-b.c"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key(".tmp"));
        assert!(!is_valid_key("../etc/passwd"));
        assert!(!is_valid_key("a b"));
        assert!(!is_valid_key("tâche"));
    }

    #[test]
    fn file_storage_creates_directory() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("nested").join("storage");

        let storage = FileStorage::with_path(&base).unwrap();
        assert!(base.is_dir());
        assert_eq!(storage.base_path(), base);
    }

    #[test]
    fn file_storage_get_missing() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::with_path(dir.path()).unwrap();
        assert_eq!(storage.get("missing").unwrap(), None);
    }

    #[test]
    fn file_storage_set_and_get() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::with_path(dir.path()).unwrap();

        storage.set("tasks", "[1,2,3]").unwrap();
        assert_eq!(storage.get("tasks").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(dir.path().join("tasks.json").is_file());
        assert!(!dir.path().join(".tasks.json.tmp").exists());
    }

    #[test]
    fn file_storage_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::with_path(dir.path()).unwrap();

        storage.set("tasks", "old").unwrap();
        storage.set("tasks", "new").unwrap();
        assert_eq!(storage.get("tasks").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn file_storage_keys_are_independent() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::with_path(dir.path()).unwrap();

        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn file_storage_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut storage = FileStorage::with_path(dir.path()).unwrap();
            storage.set("tasks", "persisted").unwrap();
        }
        let storage = FileStorage::with_path(dir.path()).unwrap();
        assert_eq!(storage.get("tasks").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn file_storage_remove() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::with_path(dir.path()).unwrap();

        storage.set("tasks", "x").unwrap();
        storage.remove("tasks").unwrap();
        assert_eq!(storage.get("tasks").unwrap(), None);

        // Removing again is fine
        storage.remove("tasks").unwrap();
    }

    #[test]
    fn file_storage_rejects_invalid_key() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::with_path(dir.path()).unwrap();

        assert!(matches!(
            storage.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            storage.get("a/b"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(!dir.path().parent().unwrap().join("escape.json").exists());
    }

    #[test]
    fn memory_storage_basics() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn memory_storage_rejects_invalid_key() {
        let mut storage = MemoryStorage::new();
        assert!(storage.set("", "v").is_err());
    }

    #[test]
    fn boxed_storage_delegates() {
        let mut storage: Box<dyn KeyValueStorage> = Box::new(MemoryStorage::new());
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
