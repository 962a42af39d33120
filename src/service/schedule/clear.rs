//! Schedule clearing.

use crate::{data::scheduled_event::ScheduledEventRepository, error::AppError};

use super::ScheduleService;

/// Outcome of a clear run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearSummary {
    /// Posted messages deleted from the schedule channel.
    pub messages_deleted: usize,
    /// Reaction observers detached.
    pub observers_removed: usize,
    /// Stored events removed.
    pub events_deleted: u64,
}

impl<'a> ScheduleService<'a> {
    /// Deletes every stored event together with its posted message and observer.
    ///
    /// Only the observers of the cleared events are detached.
    ///
    /// # Returns
    /// - `Ok(ClearSummary)` - Counts of deleted messages, observers, and events
    /// - `Err(AppError)` - Database or Discord failure; nothing is deleted from the store
    ///   when the message deletion fails
    pub async fn clear_schedule(&self) -> Result<ClearSummary, AppError> {
        let repo = ScheduledEventRepository::new(self.db);
        let events = repo.find_all().await?;

        let message_ids: Vec<u64> = events.iter().filter_map(|event| event.message_id).collect();

        let observers_removed = self.observers.deregister(&message_ids).await;
        if !message_ids.is_empty() {
            self.platform
                .delete_messages(self.channels.schedule, &message_ids)
                .await?;
        }
        let events_deleted = repo.delete_all(&events).await?;

        tracing::info!(
            "Cleared {} scheduled events and {} messages",
            events_deleted,
            message_ids.len()
        );

        Ok(ClearSummary {
            messages_deleted: message_ids.len(),
            observers_removed,
            events_deleted,
        })
    }
}
