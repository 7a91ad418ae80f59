//! Service layer for board session orchestration.

mod session;

pub use session::{BoardSession, SeedMode};
