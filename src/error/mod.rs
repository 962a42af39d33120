//! Error types for the live bot.
//!
//! `AppError` is the top-level error returned by services and command handlers. It wraps
//! domain-specific errors from configuration, the database, Discord, and the schedule
//! spreadsheet. Command handlers turn it into an ephemeral reply plus an error-channel
//! report; reaction handlers only log it.

pub mod config;
pub mod internal;
pub mod sheet;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, sheet::SheetError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client request error from reqwest, raised by the Sheets API client.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Schedule spreadsheet contents could not be read or written.
    #[error(transparent)]
    SheetErr(#[from] SheetError),

    /// Unexpected state indicating a bug or corrupted stored data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
