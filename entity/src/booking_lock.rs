use sea_orm::entity::prelude::*;

/// One row per (room, date) that has ever been booked. Writers upsert the row at the
/// start of a booking transaction so that concurrent check-and-write sequences for the
/// same room and day serialize on it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking_lock")]
pub struct Model {
    /// `classroom:<id>` or `study_room:<id>`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_key: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub date: Date,
    pub locked_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
