use serenity::all::{Context, Reaction};

use crate::{model::reaction::ReactionKind, state::BotState};

/// Handles a reaction added to a message.
///
/// Only reactions from users in the schedule channel with a recognised emoji are passed on
/// to the attendance service. Errors are logged and swallowed.
pub async fn handle_reaction_add(state: &BotState, ctx: Context, reaction: Reaction) {
    if reaction.channel_id.get() != state.channels.schedule {
        return;
    }

    let Some(user_id) = reaction.user_id else {
        return;
    };
    if user_id == ctx.cache.current_user().id {
        return;
    }

    let Some(kind) = ReactionKind::from_reaction(&reaction.emoji) else {
        return;
    };

    tracing::info!(
        "{:?} reaction from {} on message {}",
        kind,
        user_id,
        reaction.message_id
    );

    match state
        .attendance_service()
        .handle_reaction(reaction.message_id.get(), user_id.get(), kind)
        .await
    {
        Ok(outcome) => tracing::debug!(
            "Reaction on message {} handled: {:?}",
            reaction.message_id,
            outcome
        ),
        Err(e) => tracing::error!(
            "Failed to handle reaction on message {}: {}",
            reaction.message_id,
            e
        ),
    }
}
