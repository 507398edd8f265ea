//! Reservation domain model and its status state machine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;

use crate::{
    error::{internal::InternalError, reservation::ReservationError, AppError},
    model::{
        room::RoomRef,
        time_range::{ClockTime, TimeRange},
        user::Role,
    },
};

/// Lifecycle state of a reservation.
///
/// ```text
/// PENDING --approve--> APPROVED --cancel--> CANCELED
///    |  \--reject---> REJECTED
///    \-----cancel---> CANCELED
/// ```
///
/// REJECTED and CANCELED are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    Pending,
    Approved,
    Rejected,
    Canceled,
}

/// Events that may change (or, for edits, must preserve) a reservation's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationAction {
    Approve,
    Reject,
    Cancel,
    Edit,
}

impl ReservationStatus {
    /// Statuses that occupy their room and time window.
    pub const ACTIVE: [ReservationStatus; 2] = [Self::Pending, Self::Approved];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Parses a stored status string.
    ///
    /// # Returns
    /// - `Ok(ReservationStatus)` - Recognised status
    /// - `Err(InternalError::InvalidStoredValue)` - Unknown status
    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELED" => Ok(Self::Canceled),
            other => Err(InternalError::InvalidStoredValue {
                column: "status",
                value: other.to_string(),
                reason: "unknown reservation status".to_string(),
            }),
        }
    }

    /// Whether the reservation blocks its room for other bookings.
    pub fn is_active(self) -> bool {
        Self::ACTIVE.contains(&self)
    }

    /// Computes the status that results from `action`.
    ///
    /// Edits keep a reservation PENDING and are only allowed from PENDING.
    ///
    /// # Returns
    /// - `Ok(ReservationStatus)` - Status after the action
    /// - `Err(ReservationError::InvalidTransition)` - Action not allowed from `self`
    pub fn apply(self, action: ReservationAction) -> Result<Self, ReservationError> {
        use ReservationAction as A;
        use ReservationStatus as S;

        match (self, action) {
            (S::Pending, A::Approve) => Ok(S::Approved),
            (S::Pending, A::Reject) => Ok(S::Rejected),
            (S::Pending | S::Approved, A::Cancel) => Ok(S::Canceled),
            (S::Pending, A::Edit) => Ok(S::Pending),
            (from, action) => Err(ReservationError::InvalidTransition { from, action }),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ReservationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Cancel => "cancel",
            Self::Edit => "edit",
        })
    }
}

/// A booking of one room for one window on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// UUID v4 string.
    pub id: String,
    pub room: RoomRef,
    /// Requesting user.
    pub user_id: i32,
    pub date: NaiveDate,
    pub time: TimeRange,
    pub purpose: String,
    /// Free text written by the requester.
    pub notes: Option<String>,
    /// Reason recorded by an administrator on rejection.
    pub rejection_reason: Option<String>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Converts an entity model to a reservation domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The converted reservation
    /// - `Err(AppError::InternalErr)` - Room columns, times or status are corrupt
    pub fn from_entity(entity: entity::reservation::Model) -> Result<Self, AppError> {
        let room = RoomRef::from_columns(&entity.id, entity.classroom_id, entity.study_room_id)?;
        let time = stored_time_range(&entity.start_time, &entity.end_time)?;
        let status = ReservationStatus::parse(&entity.status)?;

        Ok(Self {
            id: entity.id,
            room,
            user_id: entity.user_id,
            date: entity.date,
            time,
            purpose: entity.purpose,
            notes: entity.notes,
            rejection_reason: entity.rejection_reason,
            status,
            created_at: entity.created_at,
        })
    }
}

fn stored_time_range(start: &str, end: &str) -> Result<TimeRange, InternalError> {
    let parse = |column: &'static str, value: &str| {
        ClockTime::parse(value).map_err(|e| InternalError::InvalidStoredValue {
            column,
            value: value.to_string(),
            reason: e.to_string(),
        })
    };

    let start_time = parse("start_time", start)?;
    let end_time = parse("end_time", end)?;

    TimeRange::new(start_time, end_time).map_err(|e| InternalError::InvalidStoredValue {
        column: "end_time",
        value: end.to_string(),
        reason: e.to_string(),
    })
}

/// Parameters for requesting a new reservation.
#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub room: RoomRef,
    pub date: NaiveDate,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    pub purpose: String,
    pub notes: Option<String>,
}

/// Parameters for editing a pending reservation. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct EditReservationParam {
    pub room: Option<RoomRef>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub purpose: Option<String>,
    pub notes: Option<String>,
}

/// Validated details written by an edit.
#[derive(Debug, Clone)]
pub struct ReservationDetails {
    pub room: RoomRef,
    pub date: NaiveDate,
    pub time: TimeRange,
    pub purpose: String,
    pub notes: Option<String>,
}

/// Filter for the administrator's pending-request view.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemandFilter {
    /// Only requests made by users with this role.
    pub role: Option<Role>,
    /// Only requests whose date falls in this calendar month (1-12), any year.
    pub month: Option<u32>,
}

/// Reservation row enriched for listing screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationSummary {
    pub id: String,
    pub room: RoomRef,
    /// Room number or name, `"N/A"` when the room no longer resolves.
    pub room_label: String,
    /// Requester's display name, `"N/A"` when the user no longer resolves.
    pub requester_name: String,
    pub requester_role: Option<Role>,
    pub date: NaiveDate,
    /// `"HH:MM - HH:MM"`
    pub time: String,
    pub status: ReservationStatus,
    pub purpose: String,
    pub notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}
