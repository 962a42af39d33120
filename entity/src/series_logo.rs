use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "series_logo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub series_name: String,
    /// Lower-cased series name used for case-insensitive lookups.
    #[sea_orm(unique)]
    pub series_key: String,
    pub thumbnail_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
