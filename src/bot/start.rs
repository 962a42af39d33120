use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::BotState};

/// Connects the bot to Discord and processes events until shutdown.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared bot state used by the event handler
///
/// # Returns
/// - `Ok(())` - The gateway connection closed cleanly
/// - `Err(AppError::DiscordErr)` - Failed to build the client or connect
pub async fn start_bot(config: &Config, state: BotState) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
