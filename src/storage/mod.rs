//! Key-value persistence for the history log
//!
//! The browser widget kept its history in `localStorage`; here the same contract is a
//! small trait with two backends:
//! - [`FileStore`]: one `<key>.json` file per key, written atomically
//! - [`MemoryStore`]: process-local map, used when no data directory is available
//!
//! Both accept an optional byte quota so a full store behaves like a browser that
//! refuses the write.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::PersistenceError;

/// Textual key-value storage addressed by fixed keys
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }
}

/// Reject values larger than `quota` bytes
pub(crate) fn check_quota(
    key: &str,
    value: &str,
    quota: Option<usize>,
) -> Result<(), PersistenceError> {
    match quota {
        Some(quota) if value.len() > quota => Err(PersistenceError::QuotaExceeded {
            key: key.to_string(),
            size: value.len(),
            quota,
        }),
        _ => Ok(()),
    }
}
