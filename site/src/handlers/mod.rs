//! HTTP handlers
//!
//! Axum request handlers for the site endpoints.

pub mod downloads;
pub mod locale;
pub mod page;
pub mod releases;

pub use downloads::get_downloads;
pub use page::get_page;
pub use releases::get_releases;

use axum::http::{header, HeaderMap};
use serde::Deserialize;

/// Query string accepted by every page endpoint
#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}
