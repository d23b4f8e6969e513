//! Key-value storage backends for UI preferences.
//!
//! The UI persists a handful of strings between sessions. [`KeyValueStore`]
//! is the seam; [`InMemoryStore`] backs tests and ephemeral sessions, and
//! [`FileStore`] keeps a JSON object on disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use flowdeck_core::{Error, Result};

/// Trait for string key-value storage backends.
pub trait KeyValueStore: Send + Sync {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

fn poisoned(operation: &str, key: &str) -> Error {
    Error::storage_failed(operation, key, "lock poisoned")
}

/// In-memory storage implementation.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.entries
            .read()
            .map(|entries| entries.get(key).cloned())
            .map_err(|_| poisoned("get", key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .map(|mut entries| {
                entries.insert(key.to_string(), value.to_string());
            })
            .map_err(|_| poisoned("set", key))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .write()
            .map(|mut entries| {
                entries.remove(key);
            })
            .map_err(|_| poisoned("remove", key))
    }
}

/// Storage backed by a JSON object in a file.
///
/// The file is read once on open. Every mutation rewrites it through a
/// sibling temp file and a rename. The in-memory view only changes once the
/// write has succeeded.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::file_read_failed(&path, e.to_string()))?;
            if content.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            HashMap::new()
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "opened file store");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Error::directory_creation_failed(parent, e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, content).map_err(|e| Error::file_write_failed(&tmp, e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| Error::file_write_failed(&self.path, e.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.entries
            .read()
            .map(|entries| entries.get(key).cloned())
            .map_err(|_| poisoned("get", key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned("set", key))?;
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned("remove", key))?;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Tests can use expect for clarity
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_round_trip() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("k").expect("get"), None);

        store.set("k", "v").expect("set");
        assert_eq!(store.get("k").expect("get"), Some("v".to_string()));

        store.remove("k").expect("remove");
        assert_eq!(store.get("k").expect("get"), None);
    }

    #[test]
    fn test_in_memory_remove_missing_is_ok() {
        let store = InMemoryStore::new();
        assert!(store.remove("missing").is_ok());
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("prefs.json");

        let store = FileStore::open(&path).expect("open");
        store.set("current_namespace", "argo").expect("set");
        drop(store);

        let reopened = FileStore::open(&path).expect("reopen");
        assert_eq!(
            reopened.get("current_namespace").expect("get"),
            Some("argo".to_string())
        );
    }

    #[test]
    fn test_file_store_remove_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");

        let store = FileStore::open(&path).expect("open");
        store.set("a", "1").expect("set");
        store.remove("a").expect("remove");

        let reopened = FileStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("a").expect("get"), None);
    }

    #[test]
    fn test_file_store_empty_file_is_empty_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        fs::write(&path, "").expect("write");

        let store = FileStore::open(&path).expect("open");
        assert_eq!(store.get("a").expect("get"), None);
    }

    #[test]
    fn test_file_store_rejects_malformed_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2]").expect("write");

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(Error::JsonParseFailed { .. })));
    }

    #[test]
    fn test_file_store_failed_set_leaves_state_unchanged() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("write");

        // Given: a store whose parent path is a regular file
        let store = FileStore::open(blocker.join("prefs.json")).expect("open");

        // When: a write cannot be persisted
        let result = store.set("managedNamespace", "ops");

        // Then: the error surfaces and nothing is visible in memory
        assert!(matches!(result, Err(Error::DirectoryCreationFailed { .. })));
        assert_eq!(store.get("managedNamespace").expect("get"), None);
    }

    #[test]
    fn test_file_store_failed_remove_keeps_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        let store = FileStore::open(&path).expect("open");
        store.set("a", "1").expect("set");

        // A non-empty directory at the target path makes the rename fail
        fs::remove_file(&path).expect("remove file");
        fs::create_dir(&path).expect("create dir");
        fs::write(path.join("occupied"), "x").expect("occupy dir");

        assert!(store.remove("a").is_err());
        assert_eq!(store.get("a").expect("get"), Some("1".to_string()));
    }

    #[test]
    fn test_arc_dyn_store() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k").expect("get"), Some("v".to_string()));
    }
}
