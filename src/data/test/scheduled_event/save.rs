use super::*;

/// Tests saving a new event.
///
/// Verifies that an event with a posted message id is inserted with every field
/// preserved.
///
/// Expected: Ok with the stored event equal to the input
#[tokio::test]
async fn inserts_new_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut event = incoming_event(12);
    event.message_id = Some(555);

    let repo = ScheduledEventRepository::new(db);
    let saved = repo.save(&event).await?;

    assert_eq!(saved, event);
    assert_eq!(ScheduledEventEntity::find().count(db).await?, 1);

    Ok(())
}

/// Tests saving an event whose sheet index is already stored.
///
/// Verifies that the stored record is overwritten rather than duplicated, keeping at
/// most one event per sheet index.
///
/// Expected: Ok with a single record holding the new values
#[tokio::test]
async fn overwrites_event_with_same_index() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduledEventRepository::new(db);
    repo.save(&incoming_event(3)).await?;

    let mut updated = incoming_event(3);
    updated.producer = "Dave".to_string();
    updated.message_id = Some(777);
    repo.save(&updated).await?;

    assert_eq!(ScheduledEventEntity::find().count(db).await?, 1);
    let stored = repo.find_by_index(3).await?.unwrap();
    assert_eq!(stored.producer, "Dave");
    assert_eq!(stored.message_id, Some(777));

    Ok(())
}
