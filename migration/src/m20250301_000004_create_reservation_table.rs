use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User,
    m20250301_000002_create_classroom_table::Classroom,
    m20250301_000003_create_study_room_table::StudyRoom,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(string(Reservation::Id).primary_key())
                    .col(string_null(Reservation::ClassroomId))
                    .col(string_null(Reservation::StudyRoomId))
                    .col(integer(Reservation::UserId))
                    .col(date(Reservation::Date))
                    .col(string(Reservation::StartTime))
                    .col(string(Reservation::EndTime))
                    .col(text(Reservation::Purpose))
                    .col(text_null(Reservation::Notes))
                    .col(text_null(Reservation::RejectionReason))
                    .col(string(Reservation::Status).default("PENDING"))
                    .col(
                        timestamp(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_classroom_id")
                            .from(Reservation::Table, Reservation::ClassroomId)
                            .to(Classroom::Table, Classroom::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_study_room_id")
                            .from(Reservation::Table, Reservation::StudyRoomId)
                            .to(StudyRoom::Table, StudyRoom::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user_id")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_classroom_date")
                    .table(Reservation::Table)
                    .col(Reservation::ClassroomId)
                    .col(Reservation::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_study_room_date")
                    .table(Reservation::Table)
                    .col(Reservation::StudyRoomId)
                    .col(Reservation::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    ClassroomId,
    StudyRoomId,
    UserId,
    Date,
    StartTime,
    EndTime,
    Purpose,
    Notes,
    RejectionReason,
    Status,
    CreatedAt,
}
