//! Room availability for a requested window.

use chrono::NaiveDate;
use sea_orm::ConnectionTrait;

use crate::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::{reservation::Reservation, room::Bookable, time_range::TimeRange},
};

/// Returns the first reservation overlapping `range`, skipping `exclude_id`.
///
/// `reservations` are expected to be the active reservations of one room and date in
/// start-time order.
pub fn first_conflict(
    reservations: Vec<Reservation>,
    range: &TimeRange,
    exclude_id: Option<&str>,
) -> Option<Reservation> {
    reservations
        .into_iter()
        .filter(|r| Some(r.id.as_str()) != exclude_id)
        .find(|r| r.status.is_active() && r.time.overlaps(range))
}

pub struct AvailabilityService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a room is free for a window on a date.
    ///
    /// Only PENDING and APPROVED reservations block; there are no operating-hour bounds.
    ///
    /// # Arguments
    /// - `room` - Classroom or study room to check
    /// - `date` - Calendar date of the window
    /// - `range` - Requested `[start, end)` window
    ///
    /// # Returns
    /// - `Ok(true)` - No active reservation overlaps the window
    /// - `Ok(false)` - At least one active reservation overlaps
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn is_available(
        &self,
        room: &impl Bookable,
        date: NaiveDate,
        range: &TimeRange,
    ) -> Result<bool, AppError> {
        Ok(self.find_conflict(room, date, range, None).await?.is_none())
    }

    /// Finds the first active reservation colliding with a window.
    ///
    /// # Arguments
    /// - `room` - Classroom or study room to check
    /// - `date` - Calendar date of the window
    /// - `range` - Requested `[start, end)` window
    /// - `exclude_id` - Reservation to ignore, used when re-checking an edit
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Earliest-starting colliding reservation
    /// - `Ok(None)` - Window is free
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn find_conflict(
        &self,
        room: &impl Bookable,
        date: NaiveDate,
        range: &TimeRange,
        exclude_id: Option<&str>,
    ) -> Result<Option<Reservation>, AppError> {
        let room = room.room_ref();
        let reservations = ReservationRepository::new(self.db)
            .find_active_by_room_and_date(room, date)
            .await?;

        let conflict = first_conflict(reservations, range, exclude_id);

        tracing::debug!(
            "Availability of {} on {} for {}: {}",
            room,
            date,
            range,
            match &conflict {
                Some(existing) => format!("taken by reservation {}", existing.id),
                None => "free".to_string(),
            }
        );

        Ok(conflict)
    }
}
