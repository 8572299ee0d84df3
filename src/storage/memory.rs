use std::collections::HashMap;

use super::{KeyValueStore, check_quota};
use crate::error::PersistenceError;

/// In-memory store; contents are lost when the process exits
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse writes of values larger than `bytes`
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Seed a value without going through the quota check
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        check_quota(key, value, self.quota)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
