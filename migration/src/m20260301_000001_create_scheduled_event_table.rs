use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduledEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(ScheduledEvent::Id))
                    .col(integer_uniq(ScheduledEvent::SheetIndex))
                    .col(string(ScheduledEvent::SeriesName))
                    .col(string(ScheduledEvent::EventDate).default(""))
                    .col(string(ScheduledEvent::EventTime).default(""))
                    .col(string(ScheduledEvent::StreamLocation).default(""))
                    .col(text(ScheduledEvent::Description).default(""))
                    .col(text(ScheduledEvent::Notes).default(""))
                    .col(string(ScheduledEvent::Producer).default(""))
                    .col(string(ScheduledEvent::LeadCommentator).default(""))
                    .col(string(ScheduledEvent::ColourOne).default(""))
                    .col(string(ScheduledEvent::ColourTwo).default(""))
                    .col(integer(ScheduledEvent::Red))
                    .col(integer(ScheduledEvent::Green))
                    .col(integer(ScheduledEvent::Blue))
                    .col(string_null(ScheduledEvent::MessageId))
                    .col(
                        timestamp(ScheduledEvent::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Reaction lookups go through the posted message id
        manager
            .create_index(
                Index::create()
                    .name("idx_scheduled_event_message_id")
                    .table(ScheduledEvent::Table)
                    .col(ScheduledEvent::MessageId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_scheduled_event_message_id")
                    .table(ScheduledEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ScheduledEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScheduledEvent {
    Table,
    Id,
    SheetIndex,
    SeriesName,
    EventDate,
    EventTime,
    StreamLocation,
    Description,
    Notes,
    Producer,
    LeadCommentator,
    ColourOne,
    ColourTwo,
    Red,
    Green,
    Blue,
    MessageId,
    CreatedAt,
}
