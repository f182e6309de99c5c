//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::Release;
use crate::domain::ports::ReleaseSource;
use crate::error::ReleaseSourceError;

// ============================================================================
// Mock Release Source
// ============================================================================

#[derive(Default)]
pub struct MockReleaseSource {
    releases: Vec<Release>,
    should_fail: bool,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockReleaseSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every call fails like an unreachable API
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_releases(mut self, releases: Vec<Release>) -> Self {
        self.releases = releases;
        self
    }

    /// Hold each call open for `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of times `list_releases` was called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReleaseSource for MockReleaseSource {
    async fn list_releases(&self) -> Result<Vec<Release>, ReleaseSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail {
            return Err(ReleaseSourceError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        Ok(self.releases.clone())
    }
}
