use super::*;

/// Tests finding the talent a Discord user is linked to.
///
/// Expected: Ok(Some) for a linked user, Ok(None) for an unknown user
#[tokio::test]
async fn finds_mapping_by_user_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_mapping(db, "Alice", 11).await?;

    let repo = UserMappingRepository::new(db);

    let mapping = repo.find_by_user_id(11).await?.unwrap();
    assert_eq!(mapping.talent_name, "Alice");
    assert!(repo.find_by_user_id(12).await?.is_none());

    Ok(())
}
