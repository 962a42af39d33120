use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    platform::SerenityPlatform,
    sheets::GoogleSheetsClient,
    state::BotState,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schedule tables exist before the bot starts.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared bot state around a Discord HTTP client and the Sheets API client.
///
/// # Returns
/// - `Ok(BotState)` - State ready to hand to the bot and background jobs
/// - `Err(AppError::ConfigErr)` - Sheets API base URL is invalid
pub fn build_state(config: &Config, db: DatabaseConnection) -> Result<BotState, AppError> {
    let http = Arc::new(Http::new(&config.discord_bot_token));
    let platform = SerenityPlatform::new(http, config.guild_id);
    let sheet = GoogleSheetsClient::new(config.sheets.clone())?;

    Ok(BotState::new(
        db,
        Arc::new(platform),
        Arc::new(sheet),
        config.channels.clone(),
        config.guild_id,
        config.default_thumbnail_url.clone(),
    ))
}
