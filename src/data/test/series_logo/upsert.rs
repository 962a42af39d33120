use super::*;

/// Tests replacing the thumbnail of an existing series.
///
/// Expected: Ok with the lookup returning the new URL
#[tokio::test]
async fn replaces_thumbnail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeriesLogoRepository::new(db);
    repo.upsert("Endurance Cup", "https://img.example/old.png")
        .await?;
    repo.upsert("endurance cup", "https://img.example/new.png")
        .await?;

    let logo = repo.find_by_series_name("Endurance Cup").await?.unwrap();
    assert_eq!(logo.thumbnail_url, "https://img.example/new.png");

    Ok(())
}
