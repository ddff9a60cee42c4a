//! File-backed key-value backend.
//!
//! The durable analogue of browser-local storage for a single-user install:
//! the whole map is written back to one JSON file on every mutation. That
//! is deliberately simple — collections here are small and every repository
//! write is already a full-collection rewrite.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{KeyValueStore, StorageError};

/// Write-through JSON file backend.
///
/// A missing, unreadable, or corrupt file on open degrades to an empty map;
/// write failures surface as [`StorageError::WriteFailed`].
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, loading any existing contents.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(entries).map_err(|e| {
            StorageError::WriteFailed {
                reason: e.to_string(),
            }
        })?;
        std::fs::write(&self.path, json).map_err(|e| StorageError::WriteFailed {
            reason: format!("{}: {e}", self.path.display()),
        })
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.lock();
        entries.remove(key);
        self.persist(&entries)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lock().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crm.json");

        let store = FileStore::open(&path);
        store.set_raw("orgs", r#"[{"name":"Acme"}]"#).unwrap();
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(
            reopened.get_raw("orgs").unwrap().as_deref(),
            Some(r#"[{"name":"Acme"}]"#)
        );
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crm.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get_raw("orgs").unwrap(), None);
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_write_failure_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        // Path points at a directory that does not exist; writes must fail.
        let path = dir.path().join("missing").join("crm.json");
        let store = FileStore::open(&path);
        let err = store.set_raw("k", "v").unwrap_err();
        assert!(matches!(err, StorageError::WriteFailed { .. }));
    }
}
