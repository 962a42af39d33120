use crate::{
    bot::command::ScheduleCommand,
    error::AppError,
    platform::OutgoingMessage,
    service::error_report::format_error_report,
    state::BotState,
};

/// Runs a schedule command and returns the ephemeral reply for the invoking user.
///
/// Failures are logged, reported in full to the error channel, and summarised in the reply.
pub async fn run(state: &BotState, command: ScheduleCommand) -> String {
    match execute(state, command).await {
        Ok(()) => command.acknowledgement().to_string(),
        Err(e) => {
            tracing::error!("Error while {} schedule: {}", command.verb(), e);
            report_error(state, command, &e).await;
            format!("Error while {} schedule: {}", command.verb(), e)
        }
    }
}

async fn execute(state: &BotState, command: ScheduleCommand) -> Result<(), AppError> {
    let service = state.schedule_service();

    match command {
        ScheduleCommand::Clear => {
            let summary = service.clear_schedule().await?;
            tracing::info!("Schedule cleared: {:?}", summary);
        }
        ScheduleCommand::Update => {
            let summary = service.update_schedule().await?;
            tracing::info!("Schedule updated: {:?}", summary);
        }
        ScheduleCommand::Post => {
            let summary = service.post_schedule().await?;
            tracing::info!("Schedule posted: {:?}", summary);
        }
    }

    Ok(())
}

async fn report_error(state: &BotState, command: ScheduleCommand, error: &AppError) {
    let heading = format!("Error when {} schedule", command.verb());
    let report = format_error_report(&heading, error);

    if let Err(e) = state
        .platform
        .send_message(state.channels.error, OutgoingMessage::text(report))
        .await
    {
        tracing::error!("Failed to send error report: {}", e);
    }
}
