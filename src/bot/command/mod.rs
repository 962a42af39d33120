//! Slash command definitions.
//!
//! - `schedule` - `clearschedule`, `updateschedule`, `postschedule`
//! - `directory` - `maptalent`, `serieslogo`
//!
//! Every command defaults to administrator-only visibility and is accepted only from the
//! configured admin channel.

pub mod directory;
pub mod schedule;

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

pub const MAP_TALENT: &str = "maptalent";
pub const SERIES_LOGO: &str = "serieslogo";

/// The three schedule operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleCommand {
    Clear,
    Update,
    Post,
}

impl ScheduleCommand {
    pub const ALL: [ScheduleCommand; 3] = [
        ScheduleCommand::Clear,
        ScheduleCommand::Update,
        ScheduleCommand::Post,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScheduleCommand::Clear => "clearschedule",
            ScheduleCommand::Update => "updateschedule",
            ScheduleCommand::Post => "postschedule",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    fn description(self) -> &'static str {
        match self {
            ScheduleCommand::Clear => "Delete the posted schedule",
            ScheduleCommand::Update => "Apply talent changes from the spreadsheet",
            ScheduleCommand::Post => "Post this week's schedule from the spreadsheet",
        }
    }

    /// Progressive verb used in failure messages, e.g. "Error while clearing schedule".
    pub fn verb(self) -> &'static str {
        match self {
            ScheduleCommand::Clear => "clearing",
            ScheduleCommand::Update => "updating",
            ScheduleCommand::Post => "posting",
        }
    }

    /// Ephemeral reply on success.
    pub fn acknowledgement(self) -> &'static str {
        match self {
            ScheduleCommand::Clear => "Schedule cleared!",
            ScheduleCommand::Update => "Schedule Updated!",
            ScheduleCommand::Post => "Schedule Posted!",
        }
    }
}

/// Definitions of every slash command, registered in the guild on ready.
pub fn definitions() -> Vec<CreateCommand> {
    let mut commands: Vec<CreateCommand> = ScheduleCommand::ALL
        .into_iter()
        .map(|command| admin_command(command.name(), command.description()))
        .collect();

    commands.push(
        admin_command(MAP_TALENT, "Link a schedule talent name to a Discord user")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "talent",
                    "Talent name as written in the schedule",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "Discord user")
                    .required(true),
            ),
    );

    commands.push(
        admin_command(SERIES_LOGO, "Set the thumbnail shown on a series' schedule posts")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "series",
                    "Series name as written in the schedule",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "url", "Image URL")
                    .required(true),
            ),
    );

    commands
}

fn admin_command(name: &str, description: &str) -> CreateCommand {
    CreateCommand::new(name)
        .description(description)
        .default_member_permissions(Permissions::ADMINISTRATOR)
}
