//! Schedule store: the events currently posted to the schedule channel.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{error::AppError, model::scheduled_event::ScheduledEvent};

/// Repository providing database operations for posted schedule entries.
///
/// Entries are keyed by their sheet index (unique) and looked up by the id of the
/// Discord message that represents them.
pub struct ScheduledEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduledEventRepository<'a> {
    /// Creates a new ScheduledEventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored event ordered by sheet index.
    ///
    /// # Returns
    /// - `Ok(Vec<ScheduledEvent>)` - All stored events
    /// - `Err(AppError::DbErr)` - Database error
    /// - `Err(AppError::InternalErr)` - A stored message id is corrupt
    pub async fn find_all(&self) -> Result<Vec<ScheduledEvent>, AppError> {
        entity::prelude::ScheduledEvent::find()
            .order_by_asc(entity::scheduled_event::Column::SheetIndex)
            .all(self.db)
            .await?
            .into_iter()
            .map(ScheduledEvent::from_entity)
            .collect()
    }

    /// Finds the stored event for a sheet row.
    ///
    /// # Returns
    /// - `Ok(Some(ScheduledEvent))` - Event found
    /// - `Ok(None)` - No event stored for that row
    /// - `Err(AppError)` - Database error or corrupt stored data
    pub async fn find_by_index(&self, index: i32) -> Result<Option<ScheduledEvent>, AppError> {
        entity::prelude::ScheduledEvent::find()
            .filter(entity::scheduled_event::Column::SheetIndex.eq(index))
            .one(self.db)
            .await?
            .map(ScheduledEvent::from_entity)
            .transpose()
    }

    /// Finds the stored event posted as the given Discord message.
    ///
    /// # Returns
    /// - `Ok(Some(ScheduledEvent))` - Event found
    /// - `Ok(None)` - No stored event is represented by that message
    /// - `Err(AppError)` - Database error or corrupt stored data
    pub async fn find_by_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<ScheduledEvent>, AppError> {
        entity::prelude::ScheduledEvent::find()
            .filter(entity::scheduled_event::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?
            .map(ScheduledEvent::from_entity)
            .transpose()
    }

    /// Inserts the event, or overwrites the stored event with the same sheet index.
    ///
    /// # Arguments
    /// - `event` - Event to persist, including its posted message id if any
    ///
    /// # Returns
    /// - `Ok(ScheduledEvent)` - The stored event
    /// - `Err(AppError)` - Database error during insert or update
    pub async fn save(&self, event: &ScheduledEvent) -> Result<ScheduledEvent, AppError> {
        use entity::scheduled_event::Column;

        let entity = entity::prelude::ScheduledEvent::insert(entity::scheduled_event::ActiveModel {
            sheet_index: ActiveValue::Set(event.index),
            series_name: ActiveValue::Set(event.series_name.clone()),
            event_date: ActiveValue::Set(event.date.clone()),
            event_time: ActiveValue::Set(event.time.clone()),
            stream_location: ActiveValue::Set(event.stream_location.clone()),
            description: ActiveValue::Set(event.description.clone()),
            notes: ActiveValue::Set(event.notes.clone()),
            producer: ActiveValue::Set(event.producer.clone()),
            lead_commentator: ActiveValue::Set(event.lead_commentator.clone()),
            colour_one: ActiveValue::Set(event.colour_one.clone()),
            colour_two: ActiveValue::Set(event.colour_two.clone()),
            red: ActiveValue::Set(i32::from(event.colour.red)),
            green: ActiveValue::Set(i32::from(event.colour.green)),
            blue: ActiveValue::Set(i32::from(event.colour.blue)),
            message_id: ActiveValue::Set(event.message_id.map(|id| id.to_string())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(Column::SheetIndex)
                .update_columns([
                    Column::SeriesName,
                    Column::EventDate,
                    Column::EventTime,
                    Column::StreamLocation,
                    Column::Description,
                    Column::Notes,
                    Column::Producer,
                    Column::LeadCommentator,
                    Column::ColourOne,
                    Column::ColourTwo,
                    Column::Red,
                    Column::Green,
                    Column::Blue,
                    Column::MessageId,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        ScheduledEvent::from_entity(entity)
    }

    /// Deletes the stored records of the given events.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records deleted
    /// - `Err(DbErr)` - Database error
    pub async fn delete_all(&self, events: &[ScheduledEvent]) -> Result<u64, DbErr> {
        if events.is_empty() {
            return Ok(0);
        }

        let indexes: Vec<i32> = events.iter().map(|event| event.index).collect();
        let result = entity::prelude::ScheduledEvent::delete_many()
            .filter(entity::scheduled_event::Column::SheetIndex.is_in(indexes))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
