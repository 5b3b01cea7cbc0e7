//! Preference store backends.
//!
//! The store is a string key-value interface so the preference layer can be
//! exercised without a real persistence backend. [`JsonFileStore`] is the
//! durable implementation: a flat JSON string map in an XDG-compatible
//! config directory. [`MemoryStore`] backs tests and one-shot callers.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// A durable string key-value store for user preferences.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store. Never fails; contents die with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: a flat JSON string map, written pretty-printed.
///
/// A missing file reads as empty. A corrupt file is a [`StoreError`] on
/// read, and is rewritten from scratch on the next `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the given file path. The file and its parent
    /// directory are created lazily on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the default XDG-compatible location
    /// (`<config-dir>/notedrill/preferences.json`), or `None` when no
    /// config directory can be determined.
    pub fn at_default_path() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    /// Returns the default preference file path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("notedrill").join("preferences.json"))
    }

    /// Returns the path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file behaves like an absent one: start a fresh map
        // rather than refusing the write.
        let mut map = self.load_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let contents = serde_json::to_string_pretty(&map)
            .expect("string map serialization cannot fail");
        fs::write(&self.path, contents).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("preferences.json"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let mut store = JsonFileStore::new(&path);
        store.set("note-naming-system", "solfege").unwrap();

        // A fresh store over the same path sees the persisted value.
        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get("note-naming-system").unwrap().as_deref(),
            Some("solfege")
        );
    }

    #[test]
    fn test_file_store_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("preferences.json"));
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_corrupt_file_errors_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json at all").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.get("k"),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn test_file_store_set_recovers_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{broken").unwrap();
        let mut store = JsonFileStore::new(&path);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
