use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeriesLogo::Table)
                    .if_not_exists()
                    .col(pk_auto(SeriesLogo::Id))
                    .col(string(SeriesLogo::SeriesName))
                    .col(string_uniq(SeriesLogo::SeriesKey))
                    .col(string(SeriesLogo::ThumbnailUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeriesLogo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SeriesLogo {
    Table,
    Id,
    SeriesName,
    SeriesKey,
    ThumbnailUrl,
}
