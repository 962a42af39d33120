//! Ready event handler.
//!
//! Fired once the bot has connected to Discord's gateway. Registers the slash commands in
//! the configured guild so they are available immediately rather than after the global
//! command propagation delay.

use serenity::all::{Context, GuildId, Ready};

use crate::{bot::command, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state holding the configured guild
/// - `ctx` - Discord context used to register commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let guild_id = GuildId::new(state.guild_id);
    match guild_id.set_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!(
            "Registered {} slash commands in guild {}",
            commands.len(),
            guild_id
        ),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
