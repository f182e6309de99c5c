//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod downloads;
pub mod release_feed;

pub use downloads::{populate_downloads, select_latest, ButtonState, DownloadButtons};
pub use release_feed::ReleaseFeed;
