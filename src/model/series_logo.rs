/// Thumbnail image shown on a series' schedule embeds.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLogo {
    pub series_name: String,
    pub thumbnail_url: String,
}

impl SeriesLogo {
    pub fn from_entity(entity: entity::series_logo::Model) -> Self {
        Self {
            series_name: entity.series_name,
            thumbnail_url: entity.thumbnail_url,
        }
    }
}
