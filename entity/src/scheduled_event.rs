use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scheduled_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub sheet_index: i32,
    pub series_name: String,
    pub event_date: String,
    pub event_time: String,
    pub stream_location: String,
    pub description: String,
    pub notes: String,
    pub producer: String,
    pub lead_commentator: String,
    pub colour_one: String,
    pub colour_two: String,
    pub red: i32,
    pub green: i32,
    pub blue: i32,
    pub message_id: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
