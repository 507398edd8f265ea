//! Deployment-level booking limits layered on top of the conflict guard.

use chrono::NaiveDate;

use crate::{error::reservation::ReservationError, model::time_range::TimeRange};

/// Optional limits on how far ahead and for how long rooms can be booked.
///
/// `None` means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingPolicy {
    pub max_days_in_advance: Option<u32>,
    pub max_duration_minutes: Option<u32>,
}

impl BookingPolicy {
    /// Checks a requested booking against the limits.
    ///
    /// # Arguments
    /// - `today` - Current local date
    /// - `date` - Requested date
    /// - `range` - Requested window
    ///
    /// # Returns
    /// - `Ok(())` - Within every configured limit
    /// - `Err(ReservationError::PolicyViolation)` - A limit is exceeded
    pub fn check(
        &self,
        today: NaiveDate,
        date: NaiveDate,
        range: &TimeRange,
    ) -> Result<(), ReservationError> {
        if let Some(max_days) = self.max_days_in_advance {
            let days_ahead = (date - today).num_days();
            if days_ahead > i64::from(max_days) {
                return Err(ReservationError::PolicyViolation(format!(
                    "Reservations can be made at most {} days in advance, {} is {} days away",
                    max_days, date, days_ahead
                )));
            }
        }

        if let Some(max_minutes) = self.max_duration_minutes {
            if range.duration_minutes() > max_minutes {
                return Err(ReservationError::PolicyViolation(format!(
                    "Reservations may last at most {} minutes, {} lasts {}",
                    max_minutes,
                    range,
                    range.duration_minutes()
                )));
            }
        }

        Ok(())
    }
}
