//! Step definitions for column management scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
