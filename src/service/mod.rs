//! Service layer for schedule synchronisation.
//!
//! Services sit between the bot's command and event handlers and the data layer, the
//! spreadsheet, and the chat platform:
//!
//! - **schedule**: Clear, update, and post operations on the weekly schedule
//! - **reconciliation**: Talent change detection and assignment notifications
//! - **talent**: Resolving schedule names to guild members
//! - **attendance**: Attendance recorded from reactions
//! - **observer**: Reaction observers attached to posted messages

pub mod attendance;
pub mod error_report;
pub mod observer;
pub mod reconciliation;
pub mod schedule;
pub mod series_logo;
pub mod talent;

#[cfg(test)]
mod test;
