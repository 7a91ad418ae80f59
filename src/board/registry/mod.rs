//! Stateless operations over column and task lists.
//!
//! Registries hold no state of their own: each function borrows the lists it
//! needs and returns new values for the board aggregate to adopt.

pub mod columns;
pub mod tasks;
