use crate::{
    config::ChannelConfig,
    model::scheduled_event::{Rgb, ScheduledEvent},
};

mod talent;

const SCHEDULE_CHANNEL: u64 = 101;
const TALENT_CHANNEL: u64 = 103;
const ERROR_CHANNEL: u64 = 104;
const DEFAULT_THUMBNAIL: &str = "https://cdn.example.com/default.png";

fn channels() -> ChannelConfig {
    ChannelConfig {
        schedule: SCHEDULE_CHANNEL,
        admin: 102,
        talent: TALENT_CHANNEL,
        error: ERROR_CHANNEL,
    }
}

/// Event as read from the spreadsheet.
fn sheet_event(index: i32, series_name: &str, producer: &str, lead: &str) -> ScheduledEvent {
    ScheduledEvent {
        index,
        series_name: series_name.to_string(),
        date: "Saturday 7th".to_string(),
        time: "19:00 UTC".to_string(),
        stream_location: "RaceSpot TV".to_string(),
        description: String::new(),
        notes: String::new(),
        producer: producer.to_string(),
        lead_commentator: lead.to_string(),
        colour_one: String::new(),
        colour_two: String::new(),
        colour: Rgb::DEFAULT,
        message_id: None,
    }
}
