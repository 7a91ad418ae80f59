//! Shared world state for column management BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::{InMemoryKeyValueStore, StorageGateway},
    domain::{BoardOperationError, ColumnId, StatusKey},
    services::{BoardSession, SeedMode},
};

/// Session type used by the BDD world.
pub type TestSession = BoardSession<StorageGateway<InMemoryKeyValueStore>, DefaultClock>;

/// Scenario world for column management behaviour tests.
pub struct ColumnWorld {
    pub session: TestSession,
    pub last_result: Option<Result<(), BoardOperationError>>,
}

impl ColumnWorld {
    /// Creates a world holding a blank board session.
    #[must_use]
    pub fn new() -> Self {
        let gateway = StorageGateway::new(Arc::new(InMemoryKeyValueStore::new()));
        Self {
            session: BoardSession::open(Arc::new(gateway), Arc::new(DefaultClock), SeedMode::Blank),
            last_result: None,
        }
    }

    /// Looks up the id of the column owning `status`.
    ///
    /// # Errors
    ///
    /// Returns an error when no column owns `status`.
    pub fn column_id(&self, status: &str) -> Result<ColumnId, eyre::Report> {
        self.session
            .board()
            .column_for_status(&StatusKey::new(status))
            .map(|column| column.id().clone())
            .ok_or_else(|| eyre::eyre!("no column owns status {status}"))
    }
}

impl Default for ColumnWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ColumnWorld {
    ColumnWorld::default()
}
