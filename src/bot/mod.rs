//! Discord bot integration.
//!
//! The bot registers the schedule slash commands in the configured guild, dispatches
//! them to the schedule and directory services, and turns reactions on posted schedule
//! messages into attendance updates.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, required for slash command interactions
//! - `GUILD_MESSAGE_REACTIONS` - Reactions added to schedule messages

pub mod command;
pub mod handler;
pub mod start;
