use crate::{
    error::{config::ConfigError, AppError},
    model::slot::SlotGrid,
    service::policy::BookingPolicy,
};

pub struct Config {
    pub database_url: String,

    /// Daily booking grid shown on slot boards.
    pub slot_grid: SlotGrid,
    /// When false, no reservation email is sent.
    pub email_notifications: bool,

    pub max_days_in_advance: Option<u32>,
    pub max_hours_per_reservation: Option<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let slot_grid = match optional_var("SLOT_GRID") {
            Some(value) => SlotGrid::parse(&value).map_err(|e| ConfigError::InvalidValue {
                var: "SLOT_GRID".to_string(),
                reason: e.to_string(),
            })?,
            None => SlotGrid::default(),
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            slot_grid,
            email_notifications: parse_var("EMAIL_NOTIFICATIONS")?.unwrap_or(true),
            max_days_in_advance: parse_var("MAX_DAYS_IN_ADVANCE")?,
            max_hours_per_reservation: parse_var("MAX_HOURS_PER_RESERVATION")?,
        })
    }

    /// Booking limits derived from the configured maximums.
    pub fn booking_policy(&self) -> BookingPolicy {
        BookingPolicy {
            max_days_in_advance: self.max_days_in_advance,
            max_duration_minutes: self
                .max_hours_per_reservation
                .map(|hours| hours.saturating_mul(60)),
        }
    }
}

/// Reads a variable, treating unset and blank values as absent.
fn optional_var(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_var<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    optional_var(var)
        .map(|value| {
            value.parse::<T>().map_err(|e| ConfigError::InvalidValue {
                var: var.to_string(),
                reason: format!("'{}': {}", value, e),
            })
        })
        .transpose()
}
