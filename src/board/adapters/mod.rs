//! Adapter implementations for board persistence ports.

mod directory;
mod gateway;
mod memory;

pub use directory::DirectoryKeyValueStore;
pub use gateway::{StorageGateway, StorageKeys};
pub use memory::InMemoryKeyValueStore;
