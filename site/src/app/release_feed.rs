//! Release feed service
//!
//! Fetches the release list once per process and shares the result with every
//! consumer. The first caller starts the fetch; everyone else (including
//! callers that arrive while it is still in flight) waits on the same value.
//! Failures are logged and cached as an empty list, never retried.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;

use crate::domain::entities::Release;
use crate::domain::ports::ReleaseSource;

type FeedSlot = watch::Receiver<Option<Arc<[Release]>>>;

/// Memoized access to the release list
pub struct ReleaseFeed<RS>
where
    RS: ReleaseSource + 'static,
{
    source: Arc<RS>,
    /// `None` until the first fetch starts
    slot: Mutex<Option<FeedSlot>>,
}

impl<RS> ReleaseFeed<RS>
where
    RS: ReleaseSource + 'static,
{
    pub fn new(source: Arc<RS>) -> Self {
        Self {
            source,
            slot: Mutex::new(None),
        }
    }

    /// The release list, newest first, exactly as the source returned it.
    ///
    /// Empty when the fetch failed. Never errors.
    pub async fn fetch(&self) -> Arc<[Release]> {
        let mut slot = self.slot();

        let releases = match slot.wait_for(Option::is_some).await {
            Ok(value) => value.clone().unwrap_or_else(empty),
            Err(_) => {
                tracing::warn!("Release fetch task ended without a result");
                empty()
            }
        };
        releases
    }

    /// Whether a fetch has been started
    pub fn is_started(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn slot(&self) -> FeedSlot {
        let mut holder = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = holder.as_ref() {
            return slot.clone();
        }

        let (tx, rx) = watch::channel(None);
        let source = Arc::clone(&self.source);

        // Runs on its own task so a caller going away cannot cancel it.
        tokio::spawn(async move {
            let releases = load(source.as_ref()).await;
            tx.send_replace(Some(releases));
        });

        *holder = Some(rx.clone());
        rx
    }
}

async fn load<RS: ReleaseSource>(source: &RS) -> Arc<[Release]> {
    tracing::debug!("Fetching release list");

    match source.list_releases().await {
        Ok(releases) => {
            tracing::info!(count = releases.len(), "Release list loaded");
            releases.into()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load releases, serving an empty list");
            empty()
        }
    }
}

fn empty() -> Arc<[Release]> {
    Arc::from(Vec::new())
}
