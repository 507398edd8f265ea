//! Error types for the reservation engine.
//!
//! `AppError` is the top-level error returned by every service operation. It wraps the
//! domain-specific error enums of this module through `#[from]` so that `?` converts them
//! automatically, plus a few generic variants for lookups and input validation.

pub mod config;
pub mod internal;
pub mod reservation;
pub mod time;

use thiserror::Error;

use crate::error::{
    config::ConfigError, internal::InternalError, reservation::ReservationError, time::TimeError,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Malformed `HH:MM` input.
    #[error(transparent)]
    TimeErr(#[from] TimeError),

    /// Booking rule violated (conflict, illegal transition, authorization, policy).
    #[error(transparent)]
    ReservationErr(#[from] ReservationError),

    /// Stored data that violates an invariant the code relies on.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}
