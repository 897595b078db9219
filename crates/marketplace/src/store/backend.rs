//! Key-value storage backends.
//!
//! The entity store is written against [`StorageBackend`] so the same
//! repositories run over an in-memory map in tests and a JSON file on
//! disk in the demo, and can later be pointed at a real database without
//! touching calling code.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::StoreError;

/// A synchronous string key-value store.
///
/// Implementations are internally synchronized; the trait is object-safe
/// so the marketplace can hold `Arc<dyn StorageBackend>`.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored at `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the underlying store fails.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` at `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the underlying store fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored at `key`. Removing a missing key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the underlying store fails.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// All keys currently present, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the underlying store fails.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(entries.keys().cloned().collect())
    }
}

/// File-backed store: one JSON object document holding every key.
///
/// The durable analog of browser local storage. The whole document is
/// rewritten on every mutation, which is fine at demo scale. A missing or
/// corrupt file loads as an empty store (warn-logged) so bad data never
/// blocks startup.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing data if present.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_document(&path);
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(entries)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Backend(e.to_string()))?;
        }
        std::fs::write(&self.path, raw).map_err(|e| StoreError::Backend(e.to_string()))
    }
}

fn load_document(path: &Path) -> HashMap<String, String> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "data file unreadable, starting empty");
            return HashMap::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "data file corrupt, starting empty");
            HashMap::new()
        }
    }
}

impl StorageBackend for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        entries.remove(key);
        self.persist(&entries)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(entries.keys().cloned().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let unique = ecofinds_core::types::id::generate_raw(name);
        std::env::temp_dir().join(format!("ecofinds-test-{unique}.json"))
    }

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());

        // Removing again is a no-op
        store.remove("k").unwrap();
    }

    #[test]
    fn test_memory_store_keys() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        let mut keys = store.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let path = temp_path("reopen");

        let store = JsonFileStore::open(&path);
        store.set("k", "v").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_corrupt_document_starts_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{{{{ definitely not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert!(store.get("k").unwrap().is_none());
        assert!(store.keys().unwrap().is_empty());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_missing_file_starts_empty() {
        let path = temp_path("missing");
        let store = JsonFileStore::open(&path);
        assert!(store.keys().unwrap().is_empty());
    }
}
