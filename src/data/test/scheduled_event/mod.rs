use crate::{
    data::scheduled_event::ScheduledEventRepository,
    error::AppError,
    model::scheduled_event::{Rgb, ScheduledEvent},
};
use entity::prelude::ScheduledEvent as ScheduledEventEntity;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_all;
mod find_all;
mod find_by_index;
mod find_by_message_id;
mod save;

/// Event as it would arrive from the spreadsheet, not yet posted.
fn incoming_event(index: i32) -> ScheduledEvent {
    ScheduledEvent {
        index,
        series_name: "Porsche Cup".to_string(),
        date: "Friday 13th".to_string(),
        time: "18:00 UTC".to_string(),
        stream_location: "RaceSpot TV".to_string(),
        description: "Round 4".to_string(),
        notes: String::new(),
        producer: "Alice".to_string(),
        lead_commentator: "Bob".to_string(),
        colour_one: "Carol".to_string(),
        colour_two: String::new(),
        colour: Rgb::new(200, 16, 46),
        message_id: None,
    }
}
