//! Clock times and half-open time ranges.
//!
//! Reservation times are stored as zero-padded `HH:MM` strings and compared as minutes
//! since midnight. Every overlap decision in the crate goes through [`overlaps`].

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{reservation::ReservationError, time::TimeError};

/// Minutes in a day; `24:00` as a clock time.
pub const END_OF_DAY: u32 = 24 * 60;

/// Converts an `HH:MM` string into minutes since midnight.
///
/// The input must split on `:` into exactly two numeric parts, with hours in `0..=23`
/// and minutes in `0..=59`. Single-digit hours such as `"9:05"` are accepted. `"24:00"`
/// maps to the end of the day (1440); it can only ever close a range.
///
/// # Arguments
/// - `value` - Clock time as `HH:MM`
///
/// # Returns
/// - `Ok(u32)` - `hours * 60 + minutes`
/// - `Err(TimeError::InvalidFormat)` - Malformed or out-of-range input
pub fn to_minutes(value: &str) -> Result<u32, TimeError> {
    let invalid = || TimeError::InvalidFormat {
        value: value.to_string(),
    };

    let mut parts = value.split(':');
    let (Some(hours), Some(minutes), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let is_numeric =
        |s: &str| !s.is_empty() && s.len() <= 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !is_numeric(hours) || !is_numeric(minutes) {
        return Err(invalid());
    }

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if (hours, minutes) == (24, 0) {
        return Ok(END_OF_DAY);
    }
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Half-open interval overlap test on `[start, end)`.
///
/// Ranges that only touch (`end_a == start_b`) do not overlap.
pub fn overlaps(start_a: u32, end_a: u32, start_b: u32, end_b: u32) -> bool {
    start_a < end_b && end_a > start_b
}

/// Minute of the day, rendered as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Parses an `HH:MM` string.
    pub fn parse(value: &str) -> Result<Self, TimeError> {
        to_minutes(value).map(|m| Self(m as u16))
    }

    /// Builds a clock time from minutes since midnight; `None` past 24:00.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes <= END_OF_DAY).then_some(Self(minutes as u16))
    }

    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A non-empty `[start, end)` window within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: ClockTime,
    end: ClockTime,
}

impl TimeRange {
    /// Creates a range, requiring `start < end`.
    ///
    /// # Returns
    /// - `Ok(TimeRange)` - Valid range
    /// - `Err(ReservationError::InvalidTimeRange)` - `start >= end`
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self, ReservationError> {
        if start >= end {
            return Err(ReservationError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses both endpoints and validates the ordering.
    ///
    /// # Returns
    /// - `Ok(TimeRange)` - Valid range
    /// - `Err(AppError::TimeErr)` - Either endpoint is malformed
    /// - `Err(AppError::ReservationErr(InvalidTimeRange))` - `start >= end`
    pub fn parse(start: &str, end: &str) -> Result<Self, crate::error::AppError> {
        let start = ClockTime::parse(start)?;
        let end = ClockTime::parse(end)?;
        Ok(Self::new(start, end)?)
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        overlaps(
            self.start.minutes(),
            self.end.minutes(),
            other.start.minutes(),
            other.end.minutes(),
        )
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
