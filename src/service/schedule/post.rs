//! Schedule posting.

use crate::{data::scheduled_event::ScheduledEventRepository, error::AppError};

use super::ScheduleService;

/// Outcome of a post run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostSummary {
    /// Events posted and stored.
    pub posted: usize,
    /// Events that replaced an already stored event for the same sheet row.
    pub replaced: usize,
}

impl<'a> ScheduleService<'a> {
    /// Posts every event of the week to the schedule channel.
    ///
    /// Each event is stored with its message id only after the send succeeded, then an
    /// observer is attached to the new message. An event already stored for the same sheet
    /// row is replaced and the observer on its old message detached. A failure aborts the
    /// run, leaving events posted so far stored.
    ///
    /// # Returns
    /// - `Ok(PostSummary)` - Counts of posted and replaced events
    /// - `Err(AppError)` - Spreadsheet, database, or Discord failure
    pub async fn post_schedule(&self) -> Result<PostSummary, AppError> {
        let repo = ScheduledEventRepository::new(self.db);
        let mut summary = PostSummary::default();

        for mut event in self.sheet.get_weekly_events().await? {
            let message = self.schedule_message(&event).await?;
            let message_id = self
                .platform
                .send_message(self.channels.schedule, message)
                .await?;

            if let Some(previous) = repo.find_by_index(event.index).await? {
                if let Some(previous_message_id) = previous.message_id {
                    self.observers.deregister(&[previous_message_id]).await;
                }
                summary.replaced += 1;
            }

            event.message_id = Some(message_id);
            let stored = repo.save(&event).await?;
            self.observers.register(message_id, stored.index).await;

            tracing::info!("Posted {} as message {}", stored.series_name, message_id);
            summary.posted += 1;
        }

        Ok(summary)
    }
}
