//! Taskboard: a single-user kanban board core.
//!
//! This crate models a kanban board with configurable columns and prioritised
//! tasks, validates column edits, computes board statistics, and persists
//! board snapshots through a pluggable key-value store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board, column, and task values with no storage concerns
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory, directory)
//!
//! # Modules
//!
//! - [`board`]: Board aggregate, registries, persistence, and sessions

pub mod board;
