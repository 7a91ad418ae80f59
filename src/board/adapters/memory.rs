//! In-memory key-value store for tests and ephemeral sessions.

use crate::board::ports::{KeyValueError, KeyValueResult, KeyValueStore};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep a handle to the
/// store it hands to a gateway and inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored keys in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError::Backend`] when lock acquisition fails.
    pub fn keys(&self) -> KeyValueResult<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| KeyValueError::backend(std::io::Error::other(err.to_string())))?;
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| KeyValueError::backend(std::io::Error::other(err.to_string())))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| KeyValueError::backend(std::io::Error::other(err.to_string())))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> KeyValueResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| KeyValueError::backend(std::io::Error::other(err.to_string())))?;
        entries.remove(key);
        Ok(())
    }
}
