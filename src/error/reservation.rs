use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{
    reservation::{ReservationAction, ReservationStatus},
    room::RoomRef,
    time_range::ClockTime,
};

/// Booking rule violations raised by the reservation engine.
///
/// None of these are raised after a write has happened; the stored state is unchanged
/// whenever one of them is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// The requested window overlaps an active reservation of the same room and date.
    #[error(
        "{room} is already reserved on {date} from {start} to {end} (reservation {conflicting_id})"
    )]
    RoomConflict {
        room: RoomRef,
        date: NaiveDate,
        /// Id of the colliding reservation
        conflicting_id: String,
        start: ClockTime,
        end: ClockTime,
    },

    /// The reservation's current status does not allow the requested action.
    #[error("Cannot {action} a reservation that is {from}")]
    InvalidTransition {
        from: ReservationStatus,
        action: ReservationAction,
    },

    /// Cancellation requested for a reservation whose date is already over.
    #[error("Reservation {reservation_id} on {date} is in the past")]
    PastDate {
        reservation_id: String,
        date: NaiveDate,
    },

    /// The acting user is not allowed to perform the action on this reservation.
    #[error("User {user_id} is not allowed to modify reservation {reservation_id}")]
    Unauthorized {
        user_id: i32,
        reservation_id: String,
    },

    /// The reservation kept changing underneath an edit; nothing was written.
    #[error("Reservation {reservation_id} was modified concurrently, try again")]
    ConcurrentModification { reservation_id: String },

    /// Start time is not strictly before end time.
    #[error("Start time {start} must be before end time {end}")]
    InvalidTimeRange { start: ClockTime, end: ClockTime },

    /// The booking violates an advance-booking or duration limit.
    #[error("{0}")]
    PolicyViolation(String),
}
