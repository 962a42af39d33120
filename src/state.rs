//! Bot state shared across event handlers and background jobs.
//!
//! The state is built once during startup and cloned into the Discord event handler and
//! the observer expiry job. All fields are cheap to clone:
//! - `DatabaseConnection` is a connection pool
//! - `Arc<dyn ChatPlatform>` and `Arc<dyn ScheduleSheet>` are reference counted
//! - `ReactionObserverRegistry` shares its map through an `Arc`

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    config::ChannelConfig,
    platform::ChatPlatform,
    service::{
        attendance::AttendanceService, observer::ReactionObserverRegistry,
        schedule::ScheduleService, talent::TalentDirectory,
    },
    sheets::ScheduleSheet,
};

#[derive(Clone)]
pub struct BotState {
    /// Schedule store, talent directory, and series logos.
    pub db: DatabaseConnection,
    pub platform: Arc<dyn ChatPlatform>,
    pub sheet: Arc<dyn ScheduleSheet>,
    /// Reaction observers attached to posted schedule messages.
    pub observers: ReactionObserverRegistry,
    pub channels: ChannelConfig,
    pub guild_id: u64,
    pub default_thumbnail_url: String,
}

impl BotState {
    pub fn new(
        db: DatabaseConnection,
        platform: Arc<dyn ChatPlatform>,
        sheet: Arc<dyn ScheduleSheet>,
        channels: ChannelConfig,
        guild_id: u64,
        default_thumbnail_url: String,
    ) -> Self {
        Self {
            db,
            platform,
            sheet,
            observers: ReactionObserverRegistry::new(),
            channels,
            guild_id,
            default_thumbnail_url,
        }
    }

    pub fn schedule_service(&self) -> ScheduleService<'_> {
        ScheduleService::new(
            &self.db,
            self.platform.as_ref(),
            self.sheet.as_ref(),
            &self.observers,
            &self.channels,
            &self.default_thumbnail_url,
        )
    }

    pub fn attendance_service(&self) -> AttendanceService<'_> {
        AttendanceService::new(&self.db, self.sheet.as_ref(), &self.observers)
    }

    pub fn talent_directory(&self) -> TalentDirectory<'_> {
        TalentDirectory::new(&self.db, self.platform.as_ref())
    }
}
