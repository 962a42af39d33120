use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{model::series_logo::SeriesLogo, util::text::name_key};

pub struct SeriesLogoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeriesLogoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the logo for a series, ignoring case.
    pub async fn find_by_series_name(&self, series_name: &str) -> Result<Option<SeriesLogo>, DbErr> {
        let entity = entity::prelude::SeriesLogo::find()
            .filter(entity::series_logo::Column::SeriesKey.eq(name_key(series_name)))
            .one(self.db)
            .await?;

        Ok(entity.map(SeriesLogo::from_entity))
    }

    /// Sets the thumbnail for a series, replacing any existing one.
    pub async fn upsert(&self, series_name: &str, thumbnail_url: &str) -> Result<SeriesLogo, DbErr> {
        use entity::series_logo::Column;

        let entity = entity::prelude::SeriesLogo::insert(entity::series_logo::ActiveModel {
            series_name: ActiveValue::Set(series_name.to_string()),
            series_key: ActiveValue::Set(name_key(series_name)),
            thumbnail_url: ActiveValue::Set(thumbnail_url.to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(Column::SeriesKey)
                .update_columns([Column::SeriesName, Column::ThumbnailUrl])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(SeriesLogo::from_entity(entity))
    }
}
