//! Release source port trait
//!
//! Defines the interface for listing releases from the hosting API.

use async_trait::async_trait;

use crate::domain::entities::Release;
use crate::error::ReleaseSourceError;

/// Port trait for the releases-list endpoint
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// List releases, newest first, in the order the API returns them
    async fn list_releases(&self) -> Result<Vec<Release>, ReleaseSourceError>;
}
