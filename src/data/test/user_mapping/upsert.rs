use super::*;

/// Tests relinking a talent name that differs only in case.
///
/// Verifies that a name has at most one mapping: the existing row is updated with the
/// new spelling and user instead of a second row being inserted.
///
/// Expected: Ok with a single mapping pointing at the new user
#[tokio::test]
async fn replaces_mapping_for_same_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserMappingRepository::new(db);
    repo.upsert("alice", 11).await?;
    let mapping = repo.upsert("Alice", 99).await?;

    assert_eq!(mapping.user_id, 99);
    assert_eq!(mapping.talent_name, "Alice");

    let all = repo.find_by_talent_names_in(&["ALICE".to_string()]).await?;
    assert_eq!(all.len(), 1);
    assert!(repo.find_by_user_id(11).await?.is_none());

    Ok(())
}
