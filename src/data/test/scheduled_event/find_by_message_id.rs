use super::*;

/// Tests the post-then-lookup round trip.
///
/// Verifies that an event saved with a posted message id is returned unchanged when
/// looked up by that message id.
///
/// Expected: Ok(Some) equal to the saved event
#[tokio::test]
async fn returns_event_saved_with_message_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut event = incoming_event(5);
    event.message_id = Some(1_100_000_000_000_000_001);

    let repo = ScheduledEventRepository::new(db);
    let saved = repo.save(&event).await?;

    let found = repo
        .find_by_message_id(1_100_000_000_000_000_001)
        .await?
        .unwrap();
    assert_eq!(found, saved);

    Ok(())
}

/// Tests looking up a message that does not represent any event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_posted_events(db, 2).await?;

    let repo = ScheduledEventRepository::new(db);
    assert!(repo.find_by_message_id(42).await?.is_none());

    Ok(())
}
