//! Typed, namespaced access over a raw key-value backend.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::{KeyValueStore, StorageError};
use crate::error::CrmError;

/// Wraps a backend with a fixed key prefix and JSON (de)serialization.
///
/// Reads are total: a missing key, a backend read failure, or stored JSON
/// that no longer deserializes all yield `None`, so callers above can treat
/// absence as a legitimate data state. Writes propagate failure as
/// [`CrmError::PersistenceUnavailable`].
#[derive(Debug)]
pub struct Namespace<S> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> Namespace<S> {
    pub fn new(store: S, namespace: &str) -> Self {
        Self {
            store,
            prefix: format!("{namespace}/"),
        }
    }

    /// Borrow the underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }

    /// Read and deserialize a value; total (never fails).
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get_raw(&self.full_key(key)) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key, error = %e, "storage read failed, treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored value is corrupt, treating as absent");
                None
            }
        }
    }

    /// Serialize and store a value under the namespaced key.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CrmError> {
        let json = serde_json::to_string(value).map_err(|e| CrmError::PersistenceUnavailable {
            reason: e.to_string(),
        })?;
        self.store
            .set_raw(&self.full_key(key), &json)
            .map_err(storage_unavailable)
    }

    /// Remove a single namespaced key.
    pub fn remove(&self, key: &str) -> Result<(), CrmError> {
        self.store
            .remove(&self.full_key(key))
            .map_err(storage_unavailable)
    }

    /// Remove every key under this namespace, leaving unrelated data alone.
    pub fn clear_all(&self) -> Result<(), CrmError> {
        let keys = self.store.keys().map_err(storage_unavailable)?;
        for key in keys.iter().filter(|k| k.starts_with(&self.prefix)) {
            self.store.remove(key).map_err(storage_unavailable)?;
        }
        Ok(())
    }
}

fn storage_unavailable(e: StorageError) -> CrmError {
    CrmError::PersistenceUnavailable {
        reason: e.to_string(),
    }
}
