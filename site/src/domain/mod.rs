//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Release records as published by the hosting API
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
