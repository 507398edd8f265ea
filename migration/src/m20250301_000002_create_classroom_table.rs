use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Classroom::Table)
                    .if_not_exists()
                    .col(string(Classroom::Id).primary_key())
                    .col(string(Classroom::RoomNumber))
                    .col(string(Classroom::RoomType))
                    .col(integer(Classroom::Capacity))
                    .col(text(Classroom::Features).default("[]"))
                    .col(string_null(Classroom::Image))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Classroom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Classroom {
    Table,
    Id,
    RoomNumber,
    RoomType,
    Capacity,
    Features,
    Image,
}
