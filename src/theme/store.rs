//! Key-value stores for the explicit theme preference.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Deserialize;

use super::error::StoreError;

/// A string key-value store holding the user's explicit choice.
///
/// The theme resolver reads one key at start-up and writes it only when
/// the user toggles; nothing ever deletes it.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// How long an explicit preference survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageScope {
    /// Survives across visits (written to disk).
    #[default]
    Persistent,
    /// Lives only as long as the current session.
    Session,
}

/// Opens the store for a scope.
///
/// A persistent scope without a path has nowhere to write, so it degrades
/// to a session store.
pub fn open_store(scope: StorageScope, path: Option<&Path>) -> Box<dyn PreferenceStore> {
    match (scope, path) {
        (StorageScope::Persistent, Some(path)) => Box::new(FileStore::new(path)),
        (StorageScope::Persistent, None) => {
            tracing::warn!("persistent theme storage has no path, keeping preference for this session only");
            Box::new(MemoryStore::new())
        }
        (StorageScope::Session, _) => Box::new(MemoryStore::new()),
    }
}

/// Session-scoped store.
///
/// Clones share the same entries, so a host can hand one handle to the
/// resolver and keep another to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Long-lived store kept as a JSON object of strings on disk.
///
/// A missing file reads as an empty store. Writes go to a sibling
/// temporary file that is then renamed over the original.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking the write.
        let mut entries = match self.read_all() {
            Err(StoreError::Malformed { .. }) => BTreeMap::new(),
            other => other?,
        };
        entries.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&entries).map_err(|source| {
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let observer = MemoryStore::new();
        let mut writer = observer.clone();
        writer.set("theme", "light").unwrap();
        assert_eq!(observer.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut first = FileStore::new(&path);
        first.set("theme", "dark").unwrap();
        first.set("other", "kept").unwrap();

        let second = FileStore::new(&path);
        assert_eq!(second.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(second.get("other").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_file_store_malformed_read_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get("theme"),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn test_file_store_overwrites_malformed_on_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2").unwrap();

        let mut store = FileStore::new(&path);
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_unreadable_path_is_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::create_dir(&path).unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(
            store.set("theme", "dark"),
            Err(StoreError::Io { .. })
        ));
        assert!(path.is_dir());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_open_store_persistent_scope_without_path_is_session() {
        let mut first = open_store(StorageScope::Persistent, None);
        first.set("theme", "dark").unwrap();
        assert_eq!(first.get("theme").unwrap().as_deref(), Some("dark"));

        let second = open_store(StorageScope::Persistent, None);
        assert_eq!(second.get("theme").unwrap(), None);
    }

    #[test]
    fn test_open_store_session_scope_ignores_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = open_store(StorageScope::Session, Some(&path));
        store.set("theme", "dark").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_open_store_persistent_scope_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = open_store(StorageScope::Persistent, Some(&path));
        store.set("theme", "dark").unwrap();
        assert!(path.exists());
    }
}
