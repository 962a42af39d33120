use async_trait::async_trait;
use serenity::{
    all::{
        ChannelId, CreateEmbed, CreateMessage, EditMessage, GuildId, Mentionable, MessageId,
        UserId,
    },
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::AppError,
    platform::{ChatPlatform, OutgoingMessage},
};

/// Discord allows at most 100 messages per bulk delete.
const BULK_DELETE_LIMIT: usize = 100;

/// `ChatPlatform` backed by serenity's HTTP client.
#[derive(Clone)]
pub struct SerenityPlatform {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl SerenityPlatform {
    /// Creates a platform bound to the guild the bot serves.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client
    /// - `guild_id` - Guild used to resolve member mentions
    pub fn new(http: Arc<Http>, guild_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
        }
    }
}

#[async_trait]
impl ChatPlatform for SerenityPlatform {
    async fn send_message(
        &self,
        channel_id: u64,
        message: OutgoingMessage,
    ) -> Result<u64, AppError> {
        let mut builder = CreateMessage::new().content(message.content);
        if let Some(embed) = message.embed {
            builder = builder.embed(CreateEmbed::from(embed));
        }

        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, builder)
            .await?;

        Ok(sent.id.get())
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        message: OutgoingMessage,
    ) -> Result<(), AppError> {
        let mut builder = EditMessage::new().content(message.content);
        if let Some(embed) = message.embed {
            builder = builder.embed(CreateEmbed::from(embed));
        }

        self.http
            .edit_message(
                ChannelId::new(channel_id),
                MessageId::new(message_id),
                &builder,
                vec![],
            )
            .await?;

        Ok(())
    }

    async fn delete_messages(&self, channel_id: u64, message_ids: &[u64]) -> Result<(), AppError> {
        let channel_id = ChannelId::new(channel_id);

        for chunk in message_ids.chunks(BULK_DELETE_LIMIT) {
            // Bulk delete rejects fewer than two messages
            if let [single] = chunk {
                channel_id
                    .delete_message(&self.http, MessageId::new(*single))
                    .await?;
            } else {
                let ids: Vec<MessageId> = chunk.iter().copied().map(MessageId::new).collect();
                channel_id.delete_messages(&self.http, ids).await?;
            }
        }

        Ok(())
    }

    async fn member_mention(&self, user_id: u64) -> Option<String> {
        match self
            .http
            .get_member(self.guild_id, UserId::new(user_id))
            .await
        {
            Ok(member) => Some(member.user.id.mention().to_string()),
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch member {} from guild {}: {}",
                    user_id,
                    self.guild_id,
                    e
                );
                None
            }
        }
    }
}
