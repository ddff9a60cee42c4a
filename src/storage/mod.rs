//! Key-value persistence substrate.
//!
//! Everything the CRM persists goes through [`KeyValueStore`]: a synchronous
//! string-keyed map of JSON documents. The repository and document store
//! operate exclusively through this trait, enabling pluggable backends
//! ([`MemoryStore`] for tests and embedding, [`FileStore`] for durable
//! single-user installs).
//!
//! The model is single-writer and synchronous: no call blocks, suspends, or
//! retries, and read-modify-write sequences have no interleaving hazard. A
//! multi-writer deployment would need optimistic versioning layered on top;
//! that is out of scope here.

mod file;
mod memory;
mod namespace;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use namespace::Namespace;

/// Failure surfaced by a storage backend.
///
/// Only write paths propagate this upward; read paths in the layers above
/// degrade to empty data instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("storage write failed: {reason}")]
    WriteFailed { reason: String },

    #[error("storage read failed: {reason}")]
    ReadFailed { reason: String },
}

/// Synchronous string-keyed store of JSON-serialized values.
///
/// Keys are opaque; namespacing is layered on by [`Namespace`].
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw JSON for a key, `None` when absent.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store raw JSON under a key, replacing any prior value.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// All keys currently present, in unspecified order.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}
