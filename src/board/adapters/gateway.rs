//! JSON persistence gateway over a key-value store.

use crate::board::{
    domain::{Board, Column, Task},
    ports::{KeyValueStore, PersistenceGateway},
};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

const BOARD_KEY: &str = "kanban-board";
const TASKS_KEY: &str = "kanban-tasks";
const COLUMNS_KEY: &str = "kanban-columns";
const PROBE_SUFFIX: &str = "probe";

/// Storage keys used for the three persisted values.
///
/// # Examples
///
/// ```
/// use taskboard::board::adapters::StorageKeys;
///
/// assert_eq!(StorageKeys::default().board(), "kanban-board");
/// assert_eq!(StorageKeys::with_prefix("alice").tasks(), "alice-kanban-tasks");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    board: String,
    tasks: String,
    columns: String,
}

impl StorageKeys {
    /// Namespaces the default keys as `<prefix>-<key>`.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            board: format!("{prefix}-{BOARD_KEY}"),
            tasks: format!("{prefix}-{TASKS_KEY}"),
            columns: format!("{prefix}-{COLUMNS_KEY}"),
        }
    }

    /// Returns the board snapshot key.
    #[must_use]
    pub fn board(&self) -> &str {
        &self.board
    }

    /// Returns the task list key.
    #[must_use]
    pub fn tasks(&self) -> &str {
        &self.tasks
    }

    /// Returns the column list key.
    #[must_use]
    pub fn columns(&self) -> &str {
        &self.columns
    }

    fn probe(&self) -> String {
        format!("{}-{PROBE_SUFFIX}", self.board)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            board: BOARD_KEY.to_owned(),
            tasks: TASKS_KEY.to_owned(),
            columns: COLUMNS_KEY.to_owned(),
        }
    }
}

/// [`PersistenceGateway`] storing JSON documents in a [`KeyValueStore`].
///
/// Store and decode failures are logged at `warn` and reported as absent
/// values or `false`.
#[derive(Debug)]
pub struct StorageGateway<S> {
    store: Arc<S>,
    keys: StorageKeys,
}

impl<S> Clone for StorageGateway<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            keys: self.keys.clone(),
        }
    }
}

impl<S: KeyValueStore> StorageGateway<S> {
    /// Creates a gateway using the default storage keys.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    /// Creates a gateway using custom storage keys.
    #[must_use]
    pub const fn with_keys(store: Arc<S>, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Returns the storage keys in use.
    #[must_use]
    pub const fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(stored) => stored?,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read stored value");
                return None;
            }
        };
        serde_json::from_str(&raw)
            .inspect_err(|err| tracing::warn!(key, error = %err, "discarding undecodable stored value"))
            .ok()
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let encoded = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to encode value");
                return false;
            }
        };
        self.store
            .set(key, &encoded)
            .inspect_err(|err| tracing::warn!(key, error = %err, "failed to save value"))
            .is_ok()
    }

    fn remove(&self, key: &str) -> bool {
        self.store
            .remove(key)
            .inspect_err(|err| tracing::warn!(key, error = %err, "failed to remove value"))
            .is_ok()
    }

    fn is_absent(&self, key: &str) -> bool {
        matches!(self.store.get(key), Ok(None))
    }
}

impl<S: KeyValueStore> PersistenceGateway for StorageGateway<S> {
    fn load_board(&self) -> Option<Board> {
        self.read(self.keys.board())
    }

    fn save_board(&self, board: &Board) -> bool {
        self.write(self.keys.board(), board)
    }

    fn load_tasks(&self) -> Vec<Task> {
        self.read(self.keys.tasks()).unwrap_or_default()
    }

    fn save_tasks(&self, tasks: &[Task]) -> bool {
        self.write(self.keys.tasks(), tasks)
    }

    fn load_columns(&self) -> Vec<Column> {
        self.read(self.keys.columns()).unwrap_or_default()
    }

    fn save_columns(&self, columns: &[Column]) -> bool {
        self.write(self.keys.columns(), columns)
    }

    fn clear_all(&self) -> bool {
        [self.keys.board(), self.keys.tasks(), self.keys.columns()]
            .into_iter()
            .map(|key| self.remove(key))
            .fold(true, |all, removed| all && removed)
    }

    fn is_available(&self) -> bool {
        let probe = self.keys.probe();
        let writable = self.store.set(&probe, PROBE_SUFFIX).is_ok();
        writable && self.store.remove(&probe).is_ok()
    }

    fn is_pristine(&self) -> bool {
        self.is_absent(self.keys.board()) && self.is_absent(self.keys.tasks())
    }
}
