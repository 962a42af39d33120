use super::*;

/// Tests resolving talent names to mappings.
///
/// Verifies that names are matched without regard to case and that names with no
/// mapping are simply absent from the result.
///
/// Expected: Ok with mappings for Alice and Bob only
#[tokio::test]
async fn matches_names_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_mapping(db, "Alice", 11).await?;
    factory::create_user_mapping(db, "Bob", 22).await?;
    factory::create_user_mapping(db, "Carol", 33).await?;

    let repo = UserMappingRepository::new(db);
    let names = vec![
        "alice".to_string(),
        "BOB".to_string(),
        "Nobody".to_string(),
    ];
    let mut mappings = repo.find_by_talent_names_in(&names).await?;
    mappings.sort_by_key(|m| m.user_id);

    let ids: Vec<u64> = mappings.iter().map(|m| m.user_id).collect();
    assert_eq!(ids, vec![11, 22]);
    assert_eq!(mappings[0].talent_name, "Alice");

    Ok(())
}

/// Tests resolving an empty name set.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_mapping(db, "Alice", 11).await?;

    let repo = UserMappingRepository::new(db);
    assert!(repo.find_by_talent_names_in(&[]).await?.is_empty());

    Ok(())
}
