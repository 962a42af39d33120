//! Scheduled broadcast slot and its talent roles.

use crate::{
    error::AppError,
    util::{parse::parse_u64_from_string, text::same_name},
};

/// Embed colour of a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Neutral grey used when the spreadsheet leaves the colour blank.
    pub const DEFAULT: Rgb = Rgb {
        red: 128,
        green: 128,
        blue: 128,
    };

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

        Some(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }

    /// Packs the colour into the `0xRRGGBB` form Discord embeds use.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }
}

/// Talent role on a broadcast, in notification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TalentRole {
    Producer,
    LeadCommentator,
    ColourOne,
    ColourTwo,
}

impl TalentRole {
    pub const ALL: [TalentRole; 4] = [
        TalentRole::Producer,
        TalentRole::LeadCommentator,
        TalentRole::ColourOne,
        TalentRole::ColourTwo,
    ];

    /// Role name used in assignment notifications.
    pub fn label(self) -> &'static str {
        match self {
            TalentRole::Producer => "Producer",
            TalentRole::LeadCommentator => "Lead Commentator",
            TalentRole::ColourOne | TalentRole::ColourTwo => "Color Commentator",
        }
    }

    /// Colour commentator slots are optional and may be left blank.
    pub fn is_optional(self) -> bool {
        matches!(self, TalentRole::ColourOne | TalentRole::ColourTwo)
    }
}

/// One broadcast slot from the weekly schedule.
///
/// Events fetched from the spreadsheet have no `message_id`; stored events get one once
/// their embed has been posted to the schedule channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEvent {
    /// Sheet row the event was read from, stable across fetches.
    pub index: i32,
    pub series_name: String,
    pub date: String,
    pub time: String,
    pub stream_location: String,
    pub description: String,
    pub notes: String,
    pub producer: String,
    pub lead_commentator: String,
    pub colour_one: String,
    pub colour_two: String,
    pub colour: Rgb,
    /// Discord message the event is posted as.
    pub message_id: Option<u64>,
}

impl ScheduledEvent {
    /// Name assigned to `role`, empty when unassigned.
    pub fn talent(&self, role: TalentRole) -> &str {
        match role {
            TalentRole::Producer => &self.producer,
            TalentRole::LeadCommentator => &self.lead_commentator,
            TalentRole::ColourOne => &self.colour_one,
            TalentRole::ColourTwo => &self.colour_two,
        }
    }

    pub fn set_talent(&mut self, role: TalentRole, name: String) {
        match role {
            TalentRole::Producer => self.producer = name,
            TalentRole::LeadCommentator => self.lead_commentator = name,
            TalentRole::ColourOne => self.colour_one = name,
            TalentRole::ColourTwo => self.colour_two = name,
        }
    }

    /// Roles held by `talent_name`, compared case-insensitively.
    pub fn roles_of(&self, talent_name: &str) -> Vec<TalentRole> {
        TalentRole::ALL
            .into_iter()
            .filter(|role| same_name(self.talent(*role), talent_name))
            .collect()
    }

    /// Whether `talent_name` holds any of the four talent roles.
    pub fn has_talent(&self, talent_name: &str) -> bool {
        !self.roles_of(talent_name).is_empty()
    }

    /// Converts an entity model to a scheduled event at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ScheduledEvent)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored message id is not a valid snowflake
    pub fn from_entity(entity: entity::scheduled_event::Model) -> Result<Self, AppError> {
        let message_id = entity.message_id.map(parse_u64_from_string).transpose()?;

        Ok(Self {
            index: entity.sheet_index,
            series_name: entity.series_name,
            date: entity.event_date,
            time: entity.event_time,
            stream_location: entity.stream_location,
            description: entity.description,
            notes: entity.notes,
            producer: entity.producer,
            lead_commentator: entity.lead_commentator,
            colour_one: entity.colour_one,
            colour_two: entity.colour_two,
            colour: Rgb::new(
                colour_channel(entity.red),
                colour_channel(entity.green),
                colour_channel(entity.blue),
            ),
            message_id,
        })
    }
}

fn colour_channel(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}
