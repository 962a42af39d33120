use test_utils::{builder::TestBuilder, factory};

use super::fake::FakePlatform;
use crate::{
    data::user_mapping::UserMappingRepository,
    error::AppError,
    service::talent::{mention_string, TalentDirectory},
};

/// Tests resolving a talent set against the directory and the guild.
///
/// Verifies that unmapped names and mapped users who left the guild are skipped and that
/// the result follows the order of the requested names.
///
/// Expected: Ok with Carol then Alice resolved
#[tokio::test]
async fn resolves_mapped_guild_members_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user_mapping(db, "Alice", 1).await?;
    factory::create_user_mapping(db, "Bob", 2).await?;
    factory::create_user_mapping(db, "Carol", 3).await?;

    let platform = FakePlatform::with_members(&[1, 3]);
    let names = vec![
        "carol".to_string(),
        "Bob".to_string(),
        "Nobody".to_string(),
        "ALICE".to_string(),
    ];

    let resolved = TalentDirectory::new(db, &platform).resolve(&names).await?;

    let names: Vec<&str> = resolved
        .iter()
        .map(|talent| talent.talent_name.as_str())
        .collect();
    assert_eq!(names, vec!["Carol", "Alice"]);
    assert_eq!(mention_string(&resolved), "<@3>, <@1>");

    Ok(())
}

/// Tests linking a talent name that is already mapped.
///
/// Expected: Ok with the mapping pointing at the new user
#[tokio::test]
async fn link_replaces_existing_mapping() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user_mapping(db, "Alice", 1).await?;
    let platform = FakePlatform::with_members(&[]);

    TalentDirectory::new(db, &platform)
        .link(" alice ", 5)
        .await?;

    let repo = UserMappingRepository::new(db);
    assert!(repo.find_by_user_id(1).await?.is_none());
    let mapping = repo.find_by_user_id(5).await?.unwrap();
    assert_eq!(mapping.talent_name, "alice");

    Ok(())
}
