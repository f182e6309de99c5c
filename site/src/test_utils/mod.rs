//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Mocks are hand-written rather than generated so tests control exactly what
//! the release source returns and can count how often it was asked.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
