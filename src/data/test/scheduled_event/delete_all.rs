use super::*;

/// Tests deleting a set of stored events.
///
/// Verifies that only the given events are removed.
///
/// Expected: Ok with rows_affected equal to the number of given events
#[tokio::test]
async fn deletes_only_given_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::helpers::create_posted_events(db, 3).await?;
    let repo = ScheduledEventRepository::new(db);

    let to_delete: Vec<ScheduledEvent> = created[..2]
        .iter()
        .cloned()
        .map(ScheduledEvent::from_entity)
        .collect::<Result<_, _>>()?;
    let deleted = repo.delete_all(&to_delete).await?;

    assert_eq!(deleted, 2);
    let remaining = repo.find_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].index, created[2].sheet_index);

    Ok(())
}

/// Tests deleting an empty set.
///
/// Expected: Ok(0) and nothing removed
#[tokio::test]
async fn succeeds_for_empty_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_scheduled_event(db).await?;

    let repo = ScheduledEventRepository::new(db);
    assert_eq!(repo.delete_all(&[]).await?, 0);
    assert_eq!(ScheduledEventEntity::find().count(db).await?, 1);

    Ok(())
}
