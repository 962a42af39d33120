use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, Interaction,
};

use crate::{
    bot::command::{directory, schedule, ScheduleCommand},
    state::BotState,
};

/// Handles slash command interactions.
///
/// Commands from any channel other than the admin channel are refused. Accepted commands
/// are deferred with an ephemeral response, since posting and updating can take longer
/// than Discord's three second acknowledgement window.
pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Received slash command {} from {}",
        command.data.name,
        command.user.id
    );

    if command.channel_id.get() != state.channels.admin {
        respond_ephemeral(
            &ctx,
            &command,
            "This command can only be used in the admin channel.",
        )
        .await;
        return;
    }

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer {}: {}", command.data.name, e);
        return;
    }

    let reply = match ScheduleCommand::from_name(&command.data.name) {
        Some(schedule_command) => schedule::run(state, schedule_command).await,
        None => {
            let options = command.data.options();
            directory::run(state, &command.data.name, &options).await
        }
    };

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
        .await
    {
        tracing::error!("Failed to respond to {}: {}", command.data.name, e);
    }
}

async fn respond_ephemeral(ctx: &Context, command: &CommandInteraction, content: &str) {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!("Failed to respond to {}: {}", command.data.name, e);
    }
}
