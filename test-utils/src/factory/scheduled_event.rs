//! Scheduled event factory for creating test schedule entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test scheduled events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::scheduled_event::ScheduledEventFactory;
///
/// let event = ScheduledEventFactory::new(&db)
///     .series_name("Endurance Cup")
///     .lead_commentator("Bob")
///     .build()
///     .await?;
/// ```
pub struct ScheduledEventFactory<'a> {
    db: &'a DatabaseConnection,
    sheet_index: i32,
    series_name: String,
    event_date: String,
    event_time: String,
    stream_location: String,
    description: String,
    notes: String,
    producer: String,
    lead_commentator: String,
    colour_one: String,
    colour_two: String,
    rgb: (i32, i32, i32),
    message_id: Option<u64>,
}

impl<'a> ScheduledEventFactory<'a> {
    /// Creates a new ScheduledEventFactory with default values.
    ///
    /// Defaults:
    /// - sheet_index: auto-incremented
    /// - series_name: `"Series {id}"`
    /// - producer: `"Producer {id}"`, lead_commentator: `"Lead {id}"`
    /// - colour commentators: empty
    /// - message_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            sheet_index: id as i32,
            series_name: format!("Series {}", id),
            event_date: "Saturday 7th".to_string(),
            event_time: "19:00 UTC".to_string(),
            stream_location: "RaceSpot TV".to_string(),
            description: String::new(),
            notes: String::new(),
            producer: format!("Producer {}", id),
            lead_commentator: format!("Lead {}", id),
            colour_one: String::new(),
            colour_two: String::new(),
            rgb: (128, 128, 128),
            message_id: None,
        }
    }

    pub fn sheet_index(mut self, sheet_index: i32) -> Self {
        self.sheet_index = sheet_index;
        self
    }

    pub fn series_name(mut self, series_name: impl Into<String>) -> Self {
        self.series_name = series_name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    pub fn lead_commentator(mut self, lead_commentator: impl Into<String>) -> Self {
        self.lead_commentator = lead_commentator.into();
        self
    }

    pub fn colour_one(mut self, colour_one: impl Into<String>) -> Self {
        self.colour_one = colour_one.into();
        self
    }

    pub fn colour_two(mut self, colour_two: impl Into<String>) -> Self {
        self.colour_two = colour_two.into();
        self
    }

    pub fn rgb(mut self, red: i32, green: i32, blue: i32) -> Self {
        self.rgb = (red, green, blue);
        self
    }

    /// Sets the Discord message id the event was posted as.
    pub fn message_id(mut self, message_id: Option<u64>) -> Self {
        self.message_id = message_id;
        self
    }

    /// Builds and inserts the scheduled event into the database.
    ///
    /// # Returns
    /// - `Ok(entity::scheduled_event::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::scheduled_event::Model, DbErr> {
        entity::scheduled_event::ActiveModel {
            id: ActiveValue::NotSet,
            sheet_index: ActiveValue::Set(self.sheet_index),
            series_name: ActiveValue::Set(self.series_name),
            event_date: ActiveValue::Set(self.event_date),
            event_time: ActiveValue::Set(self.event_time),
            stream_location: ActiveValue::Set(self.stream_location),
            description: ActiveValue::Set(self.description),
            notes: ActiveValue::Set(self.notes),
            producer: ActiveValue::Set(self.producer),
            lead_commentator: ActiveValue::Set(self.lead_commentator),
            colour_one: ActiveValue::Set(self.colour_one),
            colour_two: ActiveValue::Set(self.colour_two),
            red: ActiveValue::Set(self.rgb.0),
            green: ActiveValue::Set(self.rgb.1),
            blue: ActiveValue::Set(self.rgb.2),
            message_id: ActiveValue::Set(self.message_id.map(|id| id.to_string())),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled event with default values.
///
/// Shorthand for `ScheduledEventFactory::new(db).build().await`.
pub async fn create_scheduled_event(
    db: &DatabaseConnection,
) -> Result<entity::scheduled_event::Model, DbErr> {
    ScheduledEventFactory::new(db).build().await
}
