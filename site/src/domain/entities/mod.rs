//! Domain entities
//!
//! Releases are external, unowned records: they are fetched, never constructed
//! by the service itself (tests aside).

pub mod release;

pub use release::{Asset, Platform, Release};
