//! Store-level lock rows serializing bookings per room and date.

use chrono::{NaiveDate, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::room::RoomRef;

pub struct BookingLockRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingLockRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Writes the lock row for a room and date, creating it on first use.
    ///
    /// Called as the first statement of a booking transaction. The write takes the
    /// database's write lock (SQLite) or the row lock (server databases) and holds it
    /// until the transaction ends, so a second writer for the same room and date waits
    /// before running its availability check.
    ///
    /// # Returns
    /// - `Ok(())` - Lock row written
    /// - `Err(DbErr)` - Database error
    pub async fn acquire(&self, room: &RoomRef, date: NaiveDate) -> Result<(), DbErr> {
        entity::prelude::BookingLock::insert(entity::booking_lock::ActiveModel {
            room_key: ActiveValue::Set(room.lock_key()),
            date: ActiveValue::Set(date),
            locked_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::booking_lock::Column::RoomKey,
                entity::booking_lock::Column::Date,
            ])
            .update_column(entity::booking_lock::Column::LockedAt)
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
