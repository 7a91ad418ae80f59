//! Kanban board management.
//!
//! This module implements a board of ordered columns, each owning a status
//! key, and the tasks placed in them. Column edits are validated against
//! their siblings, column deletion reassigns orphaned tasks, and a session
//! writes every new snapshot through a persistence gateway. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Stateless column and task operations in [`registry`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod registry;
pub mod services;

#[cfg(test)]
mod tests;
