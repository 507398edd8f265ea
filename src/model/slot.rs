//! Fixed daily booking grid and per-slot availability.

use serde::Serialize;

use crate::{
    error::AppError,
    model::time_range::{ClockTime, TimeRange},
};

/// Default grid as minutes since midnight: 08:00-09:30, 09:45-11:15, 11:30-13:00,
/// 13:30-15:00, 15:15-16:45, 17:00-18:30.
const DEFAULT_SLOTS: [(u32, u32); 6] = [
    (480, 570),
    (585, 675),
    (690, 780),
    (810, 900),
    (915, 1005),
    (1020, 1110),
];

/// The ordered list of bookable windows offered each day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid(Vec<TimeRange>);

impl SlotGrid {
    /// Creates a grid from explicit windows, sorted by start time.
    pub fn new(mut slots: Vec<TimeRange>) -> Self {
        slots.sort_by_key(|slot| slot.start());
        Self(slots)
    }

    /// Parses a comma-separated list of `HH:MM-HH:MM` windows.
    ///
    /// # Arguments
    /// - `value` - e.g. `"08:00-09:30,09:45-11:15"`
    ///
    /// # Returns
    /// - `Ok(SlotGrid)` - Parsed grid
    /// - `Err(AppError::BadRequest)` - Empty list or an entry without `-`
    /// - `Err(AppError::TimeErr)` / `Err(AppError::ReservationErr)` - Invalid window
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let mut slots = Vec::new();

        for entry in value.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (start, end) = entry.split_once('-').ok_or_else(|| {
                AppError::BadRequest(format!("Slot '{}' must look like HH:MM-HH:MM", entry))
            })?;
            slots.push(TimeRange::parse(start.trim(), end.trim())?);
        }

        if slots.is_empty() {
            return Err(AppError::BadRequest("Slot grid must not be empty".to_string()));
        }

        Ok(Self::new(slots))
    }

    pub fn slots(&self) -> &[TimeRange] {
        &self.0
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        let slots = DEFAULT_SLOTS
            .iter()
            .filter_map(|&(start, end)| {
                TimeRange::new(ClockTime::from_minutes(start)?, ClockTime::from_minutes(end)?).ok()
            })
            .collect();
        Self(slots)
    }
}

/// One grid window annotated with its availability on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
    pub available: bool,
    /// Display name of the requester holding the slot, when taken.
    pub reserved_by: Option<String>,
}

/// Marks each grid window as free or taken.
///
/// `booked` holds the active reservations of one room and date with the requester's
/// display name, ordered by start time. A window is taken when any entry overlaps it;
/// the first overlapping entry names the holder.
pub fn enumerate_slots(grid: &SlotGrid, booked: &[(TimeRange, String)]) -> Vec<TimeSlot> {
    grid.slots()
        .iter()
        .map(|slot| {
            let holder = booked
                .iter()
                .find(|(range, _)| range.overlaps(slot))
                .map(|(_, name)| name.clone());

            TimeSlot {
                start: slot.start(),
                end: slot.end(),
                available: holder.is_none(),
                reserved_by: holder,
            }
        })
        .collect()
}
