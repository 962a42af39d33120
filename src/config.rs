use crate::error::{config::ConfigError, AppError};

const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";
const DEFAULT_SHEET_NAME: &str = "Schedule";
const DEFAULT_FIRST_ROW: i32 = 2;

/// Thumbnail and footer icon used when a series has no logo of its own.
pub const DEFAULT_THUMBNAIL_URL: &str =
    "https://images-ext-2.discordapp.net/external/1VFV1ZRDAahXbuMLichmZRhPSe2qhyhtvgI0zxwTyl4/https/yt3.ggpht.com/ytc/AAUvwnjVGjj07oMFkJ6fnpkO-ac8h2895p49cDK17i9_Pw%3Ds88-c-k-c0x00ffffff-no-rj";

/// Discord channels the bot reads commands from and writes to.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelConfig {
    /// Channel where one embed per scheduled event is posted.
    pub schedule: u64,
    /// The only channel schedule commands are accepted from.
    pub admin: u64,
    /// Channel receiving "you have been assigned" notifications.
    pub talent: u64,
    /// Channel receiving detailed error reports.
    pub error: u64,
}

/// Location of the weekly schedule in Google Sheets.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub api_url: String,
    pub spreadsheet_id: String,
    pub access_token: String,
    pub sheet_name: String,
    /// First sheet row holding schedule data (1-based).
    pub first_row: i32,
}

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub guild_id: u64,
    pub channels: ChannelConfig,

    pub sheets: SheetsConfig,

    pub default_thumbnail_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            guild_id: required_id("DISCORD_GUILD_ID")?,
            channels: ChannelConfig {
                schedule: required_id("SCHEDULE_CHANNEL_ID")?,
                admin: required_id("ADMIN_CHANNEL_ID")?,
                talent: required_id("TALENT_CHANNEL_ID")?,
                error: required_id("ERROR_CHANNEL_ID")?,
            },
            sheets: SheetsConfig {
                api_url: optional("SHEETS_API_URL", DEFAULT_SHEETS_API_URL),
                spreadsheet_id: required("SHEETS_SPREADSHEET_ID")?,
                access_token: required("SHEETS_ACCESS_TOKEN")?,
                sheet_name: optional("SHEETS_SHEET_NAME", DEFAULT_SHEET_NAME),
                first_row: first_row()?,
            },
            default_thumbnail_url: optional("DEFAULT_THUMBNAIL_URL", DEFAULT_THUMBNAIL_URL),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn required_id(name: &str) -> Result<u64, ConfigError> {
    let value = required(name)?;
    value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}

fn first_row() -> Result<i32, ConfigError> {
    match std::env::var("SHEETS_FIRST_ROW") {
        Err(_) => Ok(DEFAULT_FIRST_ROW),
        Ok(value) => match value.parse::<i32>() {
            Ok(row) if row >= 1 => Ok(row),
            _ => Err(ConfigError::InvalidEnvVar {
                name: "SHEETS_FIRST_ROW".to_string(),
                value,
            }),
        },
    }
}
