use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingLock::Table)
                    .if_not_exists()
                    .col(string(BookingLock::RoomKey))
                    .col(date(BookingLock::Date))
                    .col(
                        timestamp(BookingLock::LockedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_booking_lock")
                            .col(BookingLock::RoomKey)
                            .col(BookingLock::Date),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingLock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookingLock {
    Table,
    RoomKey,
    Date,
    LockedAt,
}
