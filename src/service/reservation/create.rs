use sea_orm::TransactionTrait;

use crate::{
    data::{
        booking_lock::BookingLockRepository, reservation::ReservationRepository,
        room::RoomRepository,
    },
    error::AppError,
    model::{
        reservation::{CreateReservationParam, Reservation, ReservationDetails},
        time_range::TimeRange,
        user::User,
    },
    service::conflict::ConflictGuard,
    util::parse::today,
};

use super::{non_blank, validate_purpose, ReservationService};

impl<'a> ReservationService<'a> {
    /// Requests a new reservation in PENDING status.
    ///
    /// Validates the request, then checks for conflicts and inserts the row while holding
    /// the room/day lock and the booking transaction. Administrators are notified (and
    /// emailed) after commit; dispatch failures do not affect the result.
    ///
    /// # Arguments
    /// - `actor` - The requesting user
    /// - `param` - Room, date, `HH:MM` times, purpose and optional notes
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The stored PENDING reservation
    /// - `Err(AppError::BadRequest)` - Blank purpose
    /// - `Err(AppError::TimeErr)` - Malformed time
    /// - `Err(AppError::ReservationErr(InvalidTimeRange))` - Start not before end
    /// - `Err(AppError::ReservationErr(PolicyViolation))` - Too far ahead or too long
    /// - `Err(AppError::NotFound)` - Room does not exist
    /// - `Err(AppError::ReservationErr(RoomConflict))` - Overlaps an active reservation
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        actor: &User,
        param: CreateReservationParam,
    ) -> Result<Reservation, AppError> {
        let purpose = validate_purpose(&param.purpose)?;
        let range = TimeRange::parse(&param.start_time, &param.end_time)?;
        self.state.policy.check(today(), param.date, &range)?;

        if RoomRepository::new(&self.state.db)
            .find_by_ref(&param.room)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("{} not found", param.room)));
        }

        let details = ReservationDetails {
            room: param.room,
            date: param.date,
            time: range,
            purpose,
            notes: non_blank(param.notes),
        };

        let guard = self.state.locks.acquire(&details.room, details.date).await;
        let txn = self.state.db.begin().await?;

        BookingLockRepository::new(&txn)
            .acquire(&details.room, details.date)
            .await?;
        ConflictGuard::new(&txn)
            .assert_no_conflict(&details.room, details.date, &details.time, None)
            .await?;
        let reservation = ReservationRepository::new(&txn)
            .create(actor.id, details)
            .await?;

        txn.commit().await?;
        drop(guard);

        tracing::info!(
            "User {} requested {} on {} ({}) as reservation {}",
            actor.id,
            reservation.room,
            reservation.date,
            reservation.time,
            reservation.id
        );

        self.state.notifier.reservation_created(&reservation).await;

        Ok(reservation)
    }
}
