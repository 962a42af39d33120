use super::*;

/// Tests looking up a series logo ignoring case.
///
/// Expected: Ok(Some) regardless of case, Ok(None) for an unknown series
#[tokio::test]
async fn finds_logo_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_series_logo(db, "GT4 Masters", "https://img.example/gt4.png").await?;

    let repo = SeriesLogoRepository::new(db);

    let logo = repo.find_by_series_name("gt4 MASTERS").await?.unwrap();
    assert_eq!(logo.thumbnail_url, "https://img.example/gt4.png");
    assert!(repo.find_by_series_name("GT3 Masters").await?.is_none());

    Ok(())
}
