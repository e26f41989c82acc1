use std::sync::Arc;

use tokio::sync::watch;

use super::layout::{HostelLayout, SeedError};
use super::roster::RosterSnapshot;

/// Owns the current roster snapshot and tells subscribers when it is replaced.
///
/// Operations are applied under the channel's write lock, so two of them never
/// interleave and readers only ever observe complete snapshots.
#[derive(Debug)]
pub struct RosterStore {
    updates: watch::Sender<Arc<RosterSnapshot>>,
}

impl RosterStore {
    pub fn new(layout: &HostelLayout) -> Result<Self, SeedError> {
        let snapshot = RosterSnapshot::seeded(layout)?;
        let (updates, _) = watch::channel(Arc::new(snapshot));
        Ok(Self { updates })
    }

    pub fn snapshot(&self) -> Arc<RosterSnapshot> {
        Arc::clone(&self.updates.borrow())
    }

    /// Receiver that is marked changed after every accepted operation.
    pub fn subscribe(&self) -> watch::Receiver<Arc<RosterSnapshot>> {
        self.updates.subscribe()
    }

    /// Replaces the snapshot with the operation's result. Rejected operations
    /// leave the snapshot untouched and do not wake subscribers.
    pub(crate) fn apply<F, E>(&self, operation: F) -> Result<Arc<RosterSnapshot>, E>
    where
        F: FnOnce(&RosterSnapshot) -> Result<RosterSnapshot, E>,
    {
        let mut outcome = None;
        self.updates.send_if_modified(|current| {
            let result = operation(current).map(Arc::new);
            let accepted = result.is_ok();
            if let Ok(next) = &result {
                *current = Arc::clone(next);
            }
            outcome = Some(result);
            accepted
        });

        outcome.unwrap_or_else(|| Ok(self.snapshot()))
    }
}
