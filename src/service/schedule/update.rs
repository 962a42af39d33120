//! Talent reconciliation for posted schedule events.

use crate::{
    data::scheduled_event::ScheduledEventRepository,
    error::{internal::InternalError, AppError},
    model::scheduled_event::ScheduledEvent,
    platform::OutgoingMessage,
    service::{
        reconciliation::{apply_talent_update, has_talent_changed, resolve_talent_set},
        talent::TalentDirectory,
    },
};

use super::ScheduleService;

/// Outcome of an update run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Spreadsheet rows compared against the store.
    pub checked: usize,
    /// Stored events whose talent changed and whose message was edited.
    pub updated: usize,
    /// Assignment notifications sent to the talent channel.
    pub notifications: usize,
    /// Rows with no stored event, reported to the error channel and skipped.
    pub missing: usize,
}

impl<'a> ScheduleService<'a> {
    /// Reconciles talent changes from the spreadsheet into the posted schedule.
    ///
    /// For every row whose talent changed, the stored event takes the new talent, newly
    /// assigned talent is notified, the posted message is edited and the event saved. Rows
    /// with no stored event are reported to the error channel and skipped. Any other
    /// failure aborts the run; events handled before it stay updated.
    ///
    /// # Returns
    /// - `Ok(UpdateSummary)` - Counts of checked, updated, and missing rows
    /// - `Err(AppError::InternalErr(MissingMessageId))` - A stored event was never posted
    /// - `Err(AppError)` - Spreadsheet, database, or Discord failure
    pub async fn update_schedule(&self) -> Result<UpdateSummary, AppError> {
        let repo = ScheduledEventRepository::new(self.db);
        let directory = TalentDirectory::new(self.db, self.platform);
        let mut summary = UpdateSummary::default();

        for incoming in self.sheet.get_weekly_events().await? {
            tracing::info!("Checking {}", incoming.series_name);
            summary.checked += 1;

            let Some(mut existing) = repo.find_by_index(incoming.index).await? else {
                self.report_missing_event(&incoming).await?;
                summary.missing += 1;
                continue;
            };

            if !has_talent_changed(&existing, &incoming) {
                continue;
            }

            tracing::info!("{} has had talent updates", existing.series_name);
            let message_id = existing.message_id.ok_or(InternalError::MissingMessageId {
                index: existing.index,
            })?;

            let users = directory.resolve(&resolve_talent_set(&incoming)).await?;
            summary.notifications += apply_talent_update(
                &mut existing,
                &incoming,
                &users,
                self.platform,
                self.channels.talent,
            )
            .await?;

            tracing::info!("Editing message with id {}", message_id);

            let message = self.schedule_message(&existing).await?;
            self.platform
                .edit_message(self.channels.schedule, message_id, message)
                .await?;

            repo.save(&existing).await?;
            summary.updated += 1;
        }

        Ok(summary)
    }

    async fn report_missing_event(&self, incoming: &ScheduledEvent) -> Result<(), AppError> {
        tracing::warn!(
            "No stored event for {} at sheet row {}",
            incoming.series_name,
            incoming.index
        );

        self.platform
            .send_message(
                self.channels.error,
                OutgoingMessage::text(format!(
                    "Saved Event for {} cannot be found. Please clear and reimport schedule.",
                    incoming.series_name
                )),
            )
            .await?;

        Ok(())
    }
}
