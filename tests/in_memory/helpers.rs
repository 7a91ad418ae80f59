//! Shared test helpers for board session integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::{InMemoryKeyValueStore, StorageGateway},
    domain::{ColumnId, StatusKey},
    services::{BoardSession, SeedMode},
};

/// Gateway over the shared in-memory store.
pub type MemoryGateway = StorageGateway<InMemoryKeyValueStore>;

/// Session type used by in-memory integration tests.
pub type MemorySession = BoardSession<MemoryGateway, DefaultClock>;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> InMemoryKeyValueStore {
    InMemoryKeyValueStore::new()
}

/// Opens a session over `store` with the default storage keys.
#[must_use]
pub fn open_session(store: &InMemoryKeyValueStore, seed: SeedMode) -> MemorySession {
    let gateway = StorageGateway::new(Arc::new(store.clone()));
    BoardSession::open(Arc::new(gateway), Arc::new(DefaultClock), seed)
}

/// Looks up the id of the column owning `status`.
///
/// # Errors
///
/// Returns an error when no column owns `status`.
pub fn column_id_for(session: &MemorySession, status: &str) -> Result<ColumnId, eyre::Report> {
    session
        .board()
        .column_for_status(&StatusKey::new(status))
        .map(|column| column.id().clone())
        .ok_or_else(|| eyre::eyre!("no column owns status {status}"))
}
