//! Double-booking guard used by create and edit.

use chrono::NaiveDate;
use sea_orm::ConnectionTrait;

use crate::{
    error::{reservation::ReservationError, AppError},
    model::{room::Bookable, time_range::TimeRange},
    service::availability::AvailabilityService,
};

pub struct ConflictGuard<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConflictGuard<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Fails when the window collides with another active reservation.
    ///
    /// Must run inside the same transaction (and under the same room/date lock) as the
    /// write it protects.
    ///
    /// # Arguments
    /// - `room` - Room being booked
    /// - `date` - Date being booked
    /// - `range` - Window being booked
    /// - `exclude_id` - The reservation being edited, if any
    ///
    /// # Returns
    /// - `Ok(())` - No collision
    /// - `Err(AppError::ReservationErr(RoomConflict))` - Collides with an active reservation
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn assert_no_conflict(
        &self,
        room: &impl Bookable,
        date: NaiveDate,
        range: &TimeRange,
        exclude_id: Option<&str>,
    ) -> Result<(), AppError> {
        let conflict = AvailabilityService::new(self.db)
            .find_conflict(room, date, range, exclude_id)
            .await?;

        match conflict {
            Some(existing) => Err(ReservationError::RoomConflict {
                room: room.room_ref().clone(),
                date,
                conflicting_id: existing.id,
                start: existing.time.start(),
                end: existing.time.end(),
            }
            .into()),
            None => Ok(()),
        }
    }
}
