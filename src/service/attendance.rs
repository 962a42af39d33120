//! Attendance recorded from reactions on posted schedule messages.

use sea_orm::DatabaseConnection;

use crate::{
    data::{scheduled_event::ScheduledEventRepository, user_mapping::UserMappingRepository},
    error::AppError,
    model::reaction::ReactionKind,
    service::observer::ReactionObserverRegistry,
    sheets::ScheduleSheet,
};

/// Result of handling one reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceOutcome {
    /// Attendance was written to the spreadsheet.
    Recorded { attended: bool },
    /// A mapped user marked themselves free; logged only.
    FreeNoted,
    /// Nothing to do: unobserved message, unmapped user, or user not on the event.
    Ignored,
}

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
    sheet: &'a dyn ScheduleSheet,
    observers: &'a ReactionObserverRegistry,
}

impl<'a> AttendanceService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        sheet: &'a dyn ScheduleSheet,
        observers: &'a ReactionObserverRegistry,
    ) -> Self {
        Self {
            db,
            sheet,
            observers,
        }
    }

    /// Handles a recognised reaction added to a message in the schedule channel.
    ///
    /// Confirm and decline record attendance only when the reacting user's talent name holds
    /// one of the event's roles. Free is logged for any mapped user.
    ///
    /// # Arguments
    /// - `message_id` - Message the reaction was added to
    /// - `user_id` - Reacting Discord user
    /// - `kind` - Recognised reaction
    ///
    /// # Returns
    /// - `Ok(AttendanceOutcome)` - What, if anything, was recorded
    /// - `Err(AppError)` - Database or spreadsheet failure
    pub async fn handle_reaction(
        &self,
        message_id: u64,
        user_id: u64,
        kind: ReactionKind,
    ) -> Result<AttendanceOutcome, AppError> {
        let Some(observed_index) = self.observers.observed_event(message_id).await else {
            return Ok(AttendanceOutcome::Ignored);
        };

        let Some(event) = ScheduledEventRepository::new(self.db)
            .find_by_message_id(message_id)
            .await?
        else {
            return Ok(AttendanceOutcome::Ignored);
        };

        if event.index != observed_index {
            tracing::warn!(
                "Observer for message {} points at row {} but the stored event is row {}",
                message_id,
                observed_index,
                event.index
            );
            return Ok(AttendanceOutcome::Ignored);
        }

        let Some(mapping) = UserMappingRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
        else {
            return Ok(AttendanceOutcome::Ignored);
        };

        let attended = match kind {
            ReactionKind::Free => {
                tracing::info!(
                    "{} is free for {} on {} at {}",
                    mapping.talent_name,
                    event.series_name,
                    event.date,
                    event.time
                );
                return Ok(AttendanceOutcome::FreeNoted);
            }
            ReactionKind::Confirm => true,
            ReactionKind::Decline => false,
        };

        if !event.has_talent(&mapping.talent_name) {
            return Ok(AttendanceOutcome::Ignored);
        }

        tracing::info!(
            "{} {} attendance for {}",
            mapping.talent_name,
            if attended { "confirmed" } else { "declined" },
            event.series_name
        );

        self.sheet
            .update_attendance(&event, attended, &mapping.talent_name)
            .await?;

        Ok(AttendanceOutcome::Recorded { attended })
    }
}
