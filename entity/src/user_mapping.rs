use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_mapping")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub talent_name: String,
    /// Lower-cased talent name, unique so a name maps to at most one user.
    #[sea_orm(unique)]
    pub talent_key: String,
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
