//! Port contracts for board persistence.
//!
//! Ports define the storage-agnostic interfaces the board session depends
//! on: a raw string [`KeyValueStore`] and the typed [`PersistenceGateway`]
//! layered over it.

pub mod gateway;
pub mod key_value;

pub use gateway::PersistenceGateway;
pub use key_value::{KeyValueError, KeyValueResult, KeyValueStore};
