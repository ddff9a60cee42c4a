//! In-memory key-value backend.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::{KeyValueStore, StorageError};

/// In-memory backend over a `BTreeMap`.
///
/// The mutex exists for `Sync` soundness, not as a concurrency model; the
/// execution model is single-writer throughout.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // A poisoned lock means a panic mid-write; the map itself is still
        // structurally valid, so keep serving it.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lock().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get_raw("a").unwrap(), None);

        store.set_raw("a", "1").unwrap();
        assert_eq!(store.get_raw("a").unwrap().as_deref(), Some("1"));

        store.set_raw("a", "2").unwrap();
        assert_eq!(store.get_raw("a").unwrap().as_deref(), Some("2"));

        store.remove("a").unwrap();
        assert_eq!(store.get_raw("a").unwrap(), None);

        // removing an absent key is a no-op
        store.remove("a").unwrap();
    }

    #[test]
    fn test_keys_lists_all() {
        let store = MemoryStore::new();
        store.set_raw("x", "1").unwrap();
        store.set_raw("y", "2").unwrap();
        let mut keys = store.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["x".to_string(), "y".to_string()]);
    }
}
