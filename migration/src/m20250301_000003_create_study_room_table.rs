use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudyRoom::Table)
                    .if_not_exists()
                    .col(string(StudyRoom::Id).primary_key())
                    .col(string(StudyRoom::Name))
                    .col(string(StudyRoom::RoomType))
                    .col(integer(StudyRoom::Capacity))
                    .col(text(StudyRoom::Features).default("[]"))
                    .col(string_null(StudyRoom::Image))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudyRoom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudyRoom {
    Table,
    Id,
    Name,
    RoomType,
    Capacity,
    Features,
    Image,
}
