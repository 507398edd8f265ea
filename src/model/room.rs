//! Bookable rooms and the tagged reference that identifies them.
//!
//! Classrooms and study rooms live in separate tables but share every booking rule. The
//! rest of the crate addresses either kind through [`RoomRef`] and never sees the pair of
//! nullable foreign keys used by the reservation table.

use chrono::NaiveDate;
use serde::Serialize;
use std::{collections::BTreeSet, fmt};

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_room_features,
};

/// Label used when a referenced room row cannot be resolved.
pub const UNKNOWN_LABEL: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoomKind {
    Classroom,
    StudyRoom,
}

impl RoomKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classroom => "classroom",
            Self::StudyRoom => "study_room",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classroom => f.write_str("classroom"),
            Self::StudyRoom => f.write_str("study room"),
        }
    }
}

/// Identifies a single bookable room of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum RoomRef {
    Classroom(String),
    StudyRoom(String),
}

impl RoomRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Classroom(id) | Self::StudyRoom(id) => id,
        }
    }

    pub fn kind(&self) -> RoomKind {
        match self {
            Self::Classroom(_) => RoomKind::Classroom,
            Self::StudyRoom(_) => RoomKind::StudyRoom,
        }
    }

    /// Key identifying this room in the booking lock table and lock registry.
    ///
    /// # Returns
    /// - `String` - `classroom:<id>` or `study_room:<id>`
    pub fn lock_key(&self) -> String {
        format!("{}:{}", self.kind().as_str(), self.id())
    }

    /// Builds a reference from the two nullable reservation columns.
    ///
    /// # Arguments
    /// - `reservation_id` - Id of the row being converted, used in the error
    /// - `classroom_id` - Value of the `classroom_id` column
    /// - `study_room_id` - Value of the `study_room_id` column
    ///
    /// # Returns
    /// - `Ok(RoomRef)` - Exactly one column was set
    /// - `Err(InternalError::InvalidRoomReference)` - Both or neither were set
    pub fn from_columns(
        reservation_id: &str,
        classroom_id: Option<String>,
        study_room_id: Option<String>,
    ) -> Result<Self, InternalError> {
        match (classroom_id, study_room_id) {
            (Some(id), None) => Ok(Self::Classroom(id)),
            (None, Some(id)) => Ok(Self::StudyRoom(id)),
            _ => Err(InternalError::InvalidRoomReference {
                reservation_id: reservation_id.to_string(),
            }),
        }
    }

    /// Splits the reference back into `(classroom_id, study_room_id)` columns.
    pub fn into_columns(self) -> (Option<String>, Option<String>) {
        match self {
            Self::Classroom(id) => (Some(id), None),
            Self::StudyRoom(id) => (None, Some(id)),
        }
    }
}

impl fmt::Display for RoomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

/// Anything that can be booked: resolves to the room it stands for.
pub trait Bookable {
    fn room_ref(&self) -> &RoomRef;
}

impl Bookable for RoomRef {
    fn room_ref(&self) -> &RoomRef {
        self
    }
}

impl Bookable for Room {
    fn room_ref(&self) -> &RoomRef {
        &self.reference
    }
}

/// A classroom or study room with its catalogue data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub reference: RoomRef,
    /// Room number for classrooms, name for study rooms.
    pub name: String,
    pub capacity: u32,
    /// Free-text category such as "Lecture" or "Lab".
    pub room_type: String,
    /// Amenity tags.
    pub features: BTreeSet<String>,
    pub image: Option<String>,
}

impl Room {
    /// Converts a classroom entity at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Room)` - Converted room
    /// - `Err(AppError::InternalErr)` - Negative capacity or malformed features column
    pub fn from_classroom(entity: entity::classroom::Model) -> Result<Self, AppError> {
        Ok(Self {
            capacity: parse_capacity(entity.capacity)?,
            features: parse_room_features(entity.features)?,
            reference: RoomRef::Classroom(entity.id),
            name: entity.room_number,
            room_type: entity.room_type,
            image: entity.image,
        })
    }

    /// Converts a study room entity at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Room)` - Converted room
    /// - `Err(AppError::InternalErr)` - Negative capacity or malformed features column
    pub fn from_study_room(entity: entity::study_room::Model) -> Result<Self, AppError> {
        Ok(Self {
            capacity: parse_capacity(entity.capacity)?,
            features: parse_room_features(entity.features)?,
            reference: RoomRef::StudyRoom(entity.id),
            name: entity.name,
            room_type: entity.room_type,
            image: entity.image,
        })
    }
}

fn parse_capacity(capacity: i32) -> Result<u32, InternalError> {
    u32::try_from(capacity).map_err(|_| InternalError::InvalidStoredValue {
        column: "capacity",
        value: capacity.to_string(),
        reason: "capacity must not be negative".to_string(),
    })
}

/// Parameters for adding a room to the catalogue.
#[derive(Debug, Clone)]
pub struct CreateRoomParam {
    /// Kind and id of the new room.
    pub reference: RoomRef,
    pub name: String,
    pub room_type: String,
    pub capacity: u32,
    pub features: BTreeSet<String>,
    pub image: Option<String>,
}

/// Criteria for finding rooms free during a window.
#[derive(Debug, Clone)]
pub struct RoomSearch {
    pub kind: RoomKind,
    pub date: NaiveDate,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    /// Exact room type to match, if any.
    pub room_type: Option<String>,
    /// Minimum seating capacity, if any.
    pub min_capacity: Option<u32>,
}
