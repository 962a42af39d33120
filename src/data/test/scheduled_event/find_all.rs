use super::*;

/// Tests listing stored events.
///
/// Expected: Ok with events ordered by sheet index
#[tokio::test]
async fn returns_events_ordered_by_index() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::scheduled_event::ScheduledEventFactory::new(db)
        .sheet_index(40)
        .build()
        .await?;
    factory::scheduled_event::ScheduledEventFactory::new(db)
        .sheet_index(20)
        .build()
        .await?;

    let repo = ScheduledEventRepository::new(db);
    let events = repo.find_all().await?;

    let indexes: Vec<i32> = events.iter().map(|e| e.index).collect();
    assert_eq!(indexes, vec![20, 40]);

    Ok(())
}

/// Tests listing when nothing is stored.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduledEventRepository::new(db);
    assert!(repo.find_all().await?.is_empty());

    Ok(())
}
