//! Talent directory: which Discord user a schedule name belongs to.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::user_mapping::UserMapping, util::text::name_key};

pub struct UserMappingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserMappingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the mapping for a Discord user.
    ///
    /// # Returns
    /// - `Ok(Some(UserMapping))` - The user is linked to a talent name
    /// - `Ok(None)` - The user has no mapping
    /// - `Err(AppError)` - Database error or corrupt stored user id
    pub async fn find_by_user_id(&self, user_id: u64) -> Result<Option<UserMapping>, AppError> {
        entity::prelude::UserMapping::find()
            .filter(entity::user_mapping::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?
            .map(UserMapping::from_entity)
            .transpose()
    }

    /// Finds the mappings for any of the given talent names, ignoring case.
    ///
    /// # Arguments
    /// - `talent_names` - Names as written in the schedule
    ///
    /// # Returns
    /// - `Ok(Vec<UserMapping>)` - Mappings found; names without a mapping are absent
    /// - `Err(AppError)` - Database error or corrupt stored user id
    pub async fn find_by_talent_names_in(
        &self,
        talent_names: &[String],
    ) -> Result<Vec<UserMapping>, AppError> {
        if talent_names.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<String> = talent_names.iter().map(|name| name_key(name)).collect();

        entity::prelude::UserMapping::find()
            .filter(entity::user_mapping::Column::TalentKey.is_in(keys))
            .all(self.db)
            .await?
            .into_iter()
            .map(UserMapping::from_entity)
            .collect()
    }

    /// Links a talent name to a Discord user, replacing any existing link for that name.
    ///
    /// # Returns
    /// - `Ok(UserMapping)` - The stored mapping
    /// - `Err(AppError)` - Database error during insert or update
    pub async fn upsert(&self, talent_name: &str, user_id: u64) -> Result<UserMapping, AppError> {
        use entity::user_mapping::Column;

        let entity = entity::prelude::UserMapping::insert(entity::user_mapping::ActiveModel {
            talent_name: ActiveValue::Set(talent_name.to_string()),
            talent_key: ActiveValue::Set(name_key(talent_name)),
            user_id: ActiveValue::Set(user_id.to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(Column::TalentKey)
                .update_columns([Column::TalentName, Column::UserId])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        UserMapping::from_entity(entity)
    }
}
