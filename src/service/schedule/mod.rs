//! Weekly schedule service.
//!
//! Orchestrates the three schedule commands against the spreadsheet, the schedule store,
//! and the chat platform:
//! - `post` - Posts one embed per spreadsheet row and stores the posted events
//! - `update` - Reconciles talent changes into stored events and their messages
//! - `clear` - Deletes posted messages, their observers, and the stored events
//! - `builder` - Embed and message content construction

pub mod builder;
pub mod clear;
pub mod post;
pub mod update;

use sea_orm::DatabaseConnection;

use crate::{
    config::ChannelConfig, platform::ChatPlatform, service::observer::ReactionObserverRegistry,
    sheets::ScheduleSheet,
};

/// Service providing the schedule clear, update, and post operations.
///
/// Holds borrowed references to the shared bot state for the duration of one command.
pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
    platform: &'a dyn ChatPlatform,
    sheet: &'a dyn ScheduleSheet,
    observers: &'a ReactionObserverRegistry,
    channels: &'a ChannelConfig,
    /// Thumbnail and footer icon for series without a logo.
    default_thumbnail_url: &'a str,
}

impl<'a> ScheduleService<'a> {
    /// Creates a new ScheduleService instance.
    ///
    /// # Arguments
    /// - `db` - Schedule store, talent directory, and series logos
    /// - `platform` - Chat platform messages are sent through
    /// - `sheet` - Spreadsheet the weekly events are read from
    /// - `observers` - Registry of reaction observers on posted messages
    /// - `channels` - Configured schedule, talent, and error channels
    /// - `default_thumbnail_url` - Fallback thumbnail and footer icon
    pub fn new(
        db: &'a DatabaseConnection,
        platform: &'a dyn ChatPlatform,
        sheet: &'a dyn ScheduleSheet,
        observers: &'a ReactionObserverRegistry,
        channels: &'a ChannelConfig,
        default_thumbnail_url: &'a str,
    ) -> Self {
        Self {
            db,
            platform,
            sheet,
            observers,
            channels,
            default_thumbnail_url,
        }
    }
}
