use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMapping::Table)
                    .if_not_exists()
                    .col(pk_auto(UserMapping::Id))
                    .col(string(UserMapping::TalentName))
                    .col(string_uniq(UserMapping::TalentKey))
                    .col(string(UserMapping::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_mapping_user_id")
                    .table(UserMapping::Table)
                    .col(UserMapping::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_mapping_user_id")
                    .table(UserMapping::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserMapping::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserMapping {
    Table,
    Id,
    TalentName,
    TalentKey,
    UserId,
}
