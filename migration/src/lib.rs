pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_scheduled_event_table;
mod m20260301_000002_create_user_mapping_table;
mod m20260301_000003_create_series_logo_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_scheduled_event_table::Migration),
            Box::new(m20260301_000002_create_user_mapping_table::Migration),
            Box::new(m20260301_000003_create_series_logo_table::Migration),
        ]
    }
}
