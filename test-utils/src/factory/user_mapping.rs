//! User mapping factory for linking talent names to Discord users.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a user mapping for the given talent name and Discord user id.
///
/// The lookup key is the lower-cased talent name, matching what the
/// application stores.
///
/// # Arguments
/// - `db` - Database connection
/// - `talent_name` - Display name as written in the schedule spreadsheet
/// - `user_id` - Discord user id
///
/// # Returns
/// - `Ok(entity::user_mapping::Model)` - Created mapping
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_mapping(
    db: &DatabaseConnection,
    talent_name: &str,
    user_id: u64,
) -> Result<entity::user_mapping::Model, DbErr> {
    entity::user_mapping::ActiveModel {
        id: ActiveValue::NotSet,
        talent_name: ActiveValue::Set(talent_name.to_string()),
        talent_key: ActiveValue::Set(talent_name.to_lowercase()),
        user_id: ActiveValue::Set(user_id.to_string()),
    }
    .insert(db)
    .await
}
