//! Weekly schedule spreadsheet.
//!
//! `ScheduleSheet` is the seam the schedule and attendance services read and write the
//! spreadsheet through. `GoogleSheetsClient` implements it over the Sheets v4 values API;
//! `row` holds the column layout and row parsing.

pub mod client;
pub mod row;

use async_trait::async_trait;

use crate::{error::AppError, model::scheduled_event::ScheduledEvent};

pub use client::GoogleSheetsClient;

#[async_trait]
pub trait ScheduleSheet: Send + Sync {
    /// Reads this week's events fresh from the spreadsheet, in sheet order.
    async fn get_weekly_events(&self) -> Result<Vec<ScheduledEvent>, AppError>;

    /// Records whether `talent_name` attended `event`. Best effort, nothing is read back.
    async fn update_attendance(
        &self,
        event: &ScheduledEvent,
        attended: bool,
        talent_name: &str,
    ) -> Result<(), AppError>;
}
