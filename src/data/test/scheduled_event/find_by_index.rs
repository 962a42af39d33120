use super::*;

/// Tests finding an event by sheet index.
///
/// Expected: Ok(Some) for a stored index, Ok(None) otherwise
#[tokio::test]
async fn finds_event_by_index() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::scheduled_event::ScheduledEventFactory::new(db)
        .sheet_index(8)
        .series_name("Formula Vee")
        .build()
        .await?;

    let repo = ScheduledEventRepository::new(db);

    let found = repo.find_by_index(8).await?.unwrap();
    assert_eq!(found.series_name, stored.series_name);
    assert!(repo.find_by_index(9).await?.is_none());

    Ok(())
}
