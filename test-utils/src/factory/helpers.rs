//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::scheduled_event::ScheduledEventFactory;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` scheduled events that each have a posted message id.
///
/// Message ids are derived from the sheet index (`900_000 + index`) so tests can
/// predict them.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of events to create
///
/// # Returns
/// - `Ok(Vec<Model>)` - Created events in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_posted_events(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::scheduled_event::Model>, DbErr> {
    let mut events = Vec::with_capacity(count);
    for _ in 0..count {
        let index = next_id() as i32;
        let event = ScheduledEventFactory::new(db)
            .sheet_index(index)
            .message_id(Some(900_000 + index as u64))
            .build()
            .await?;
        events.push(event);
    }

    Ok(events)
}
