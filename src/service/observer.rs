//! Reaction observer registry.
//!
//! Each posted schedule message gets an observer handle tying its message id to the sheet
//! row it represents. Handles live in memory for five days; reactions on messages without a
//! live handle are ignored. Handles are not persisted, so a restart detaches every observer
//! until the schedule is posted again.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// How long a posted message keeps responding to reactions.
pub const OBSERVER_LIFETIME: Duration = Duration::from_secs(5 * 24 * 60 * 60);

/// Observer handle for one posted message.
#[derive(Debug, Clone, Copy)]
struct ObserverHandle {
    /// Sheet row of the event the message represents.
    event_index: i32,
    expires_at: Instant,
}

impl ObserverHandle {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Shared registry of reaction observers keyed by posted message id.
///
/// Cloning is cheap; clones share the same underlying map.
#[derive(Clone)]
pub struct ReactionObserverRegistry {
    handles: Arc<RwLock<HashMap<u64, ObserverHandle>>>,
    lifetime: Duration,
}

impl ReactionObserverRegistry {
    pub fn new() -> Self {
        Self::with_lifetime(OBSERVER_LIFETIME)
    }

    /// Creates a registry whose observers expire after `lifetime`.
    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            handles: Arc::new(RwLock::new(HashMap::new())),
            lifetime,
        }
    }

    /// Attaches an observer to `message_id`, replacing any existing handle for it.
    pub async fn register(&self, message_id: u64, event_index: i32) {
        let handle = ObserverHandle {
            event_index,
            expires_at: Instant::now() + self.lifetime,
        };
        self.handles.write().await.insert(message_id, handle);
    }

    /// Sheet row observed through `message_id`, if its observer is still live.
    pub async fn observed_event(&self, message_id: u64) -> Option<i32> {
        let handles = self.handles.read().await;
        handles
            .get(&message_id)
            .filter(|handle| !handle.is_expired(Instant::now()))
            .map(|handle| handle.event_index)
    }

    #[cfg(test)]
    pub async fn is_observing(&self, message_id: u64) -> bool {
        self.observed_event(message_id).await.is_some()
    }

    /// Detaches the observers of exactly the given messages.
    ///
    /// # Returns
    /// - `usize` - Number of handles that were removed
    pub async fn deregister(&self, message_ids: &[u64]) -> usize {
        let mut handles = self.handles.write().await;
        message_ids
            .iter()
            .filter(|id| handles.remove(*id).is_some())
            .count()
    }

    /// Drops every handle whose lifetime has passed.
    ///
    /// # Returns
    /// - `usize` - Number of handles that were pruned
    pub async fn prune_expired(&self) -> usize {
        let now = Instant::now();
        let mut handles = self.handles.write().await;
        let before = handles.len();
        handles.retain(|_, handle| !handle.is_expired(now));
        before - handles.len()
    }

    /// Number of registered handles, expired or not.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.handles.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.handles.read().await.is_empty()
    }
}

impl Default for ReactionObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}
