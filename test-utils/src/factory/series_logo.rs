//! Series logo factory for thumbnail lookups.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a series logo entry.
///
/// # Arguments
/// - `db` - Database connection
/// - `series_name` - Series name as written in the schedule spreadsheet
/// - `thumbnail_url` - Image shown as the embed thumbnail
///
/// # Returns
/// - `Ok(entity::series_logo::Model)` - Created logo
/// - `Err(DbErr)` - Database error during insert
pub async fn create_series_logo(
    db: &DatabaseConnection,
    series_name: &str,
    thumbnail_url: &str,
) -> Result<entity::series_logo::Model, DbErr> {
    entity::series_logo::ActiveModel {
        id: ActiveValue::NotSet,
        series_name: ActiveValue::Set(series_name.to_string()),
        series_key: ActiveValue::Set(series_name.to_lowercase()),
        thumbnail_url: ActiveValue::Set(thumbnail_url.to_string()),
    }
    .insert(db)
    .await
}
