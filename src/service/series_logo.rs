//! Series thumbnails shown on schedule embeds.

use sea_orm::DatabaseConnection;

use crate::{data::series_logo::SeriesLogoRepository, error::AppError, model::series_logo::SeriesLogo};

pub struct SeriesLogoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeriesLogoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Thumbnail for a series, or `default_url` when the series has no logo.
    pub async fn thumbnail_for(
        &self,
        series_name: &str,
        default_url: &str,
    ) -> Result<String, AppError> {
        let logo = SeriesLogoRepository::new(self.db)
            .find_by_series_name(series_name)
            .await?;

        Ok(logo
            .map(|logo| logo.thumbnail_url)
            .unwrap_or_else(|| default_url.to_string()))
    }

    /// Sets the logo for a series, replacing any existing one.
    pub async fn set_logo(
        &self,
        series_name: &str,
        thumbnail_url: &str,
    ) -> Result<SeriesLogo, AppError> {
        let logo = SeriesLogoRepository::new(self.db)
            .upsert(series_name.trim(), thumbnail_url.trim())
            .await?;

        tracing::info!("Set logo for series {}", logo.series_name);

        Ok(logo)
    }
}
