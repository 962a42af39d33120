//! Chat platform seam.
//!
//! Services talk to Discord through the `ChatPlatform` trait so the reconciliation and
//! posting flows can run against a recording fake in tests. `SerenityPlatform` is the
//! production implementation backed by serenity's HTTP client.

pub mod serenity;

use async_trait::async_trait;

use crate::{error::AppError, model::embed::ScheduleEmbed};

pub use self::serenity::SerenityPlatform;

/// Text plus optional embed, the unit the bot sends and edits.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub content: String,
    pub embed: Option<ScheduleEmbed>,
}

impl OutgoingMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            embed: None,
        }
    }

    pub fn with_embed(content: impl Into<String>, embed: ScheduleEmbed) -> Self {
        Self {
            content: content.into(),
            embed: Some(embed),
        }
    }
}

#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Sends a message and returns the id Discord assigned to it.
    async fn send_message(&self, channel_id: u64, message: OutgoingMessage)
        -> Result<u64, AppError>;

    /// Replaces the content and embed of a previously sent message.
    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        message: OutgoingMessage,
    ) -> Result<(), AppError>;

    /// Deletes the given messages from a channel.
    async fn delete_messages(&self, channel_id: u64, message_ids: &[u64]) -> Result<(), AppError>;

    /// Mention tag for a member of the served guild, `None` if the user is not a member.
    async fn member_mention(&self, user_id: u64) -> Option<String>;
}
