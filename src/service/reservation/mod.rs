//! Reservation workflow service.
//!
//! This module provides the `ReservationService` which drives the reservation state
//! machine. Every operation takes the acting user explicitly and performs its own
//! authorization checks.
//!
//! Writes that can create an overlap (create, edit) hold the per-room/day lock, a database
//! transaction and the `booking_lock` row across the conflict check and the write. Status
//! changes are compare-and-set on the stored status. Notifications are dispatched only
//! after the change has been committed.
//!
//! The service is organized into separate modules by concern:
//! - `create` - New reservation requests
//! - `edit` - Changes to pending requests
//! - `status` - Approve, reject and cancel
//! - `query` - Listing views

pub mod create;
pub mod edit;
pub mod query;
pub mod status;

use crate::{
    data::reservation::ReservationRepository, error::AppError,
    model::reservation::Reservation, state::AppState,
};

/// Service providing the reservation lifecycle operations.
pub struct ReservationService<'a> {
    state: &'a AppState,
}

impl<'a> ReservationService<'a> {
    /// Creates a new ReservationService instance.
    ///
    /// # Arguments
    /// - `state` - Shared application state (connection, locks, notifier, policy)
    ///
    /// # Returns
    /// - `ReservationService` - New service instance
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Gets a reservation by id.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The reservation
    /// - `Err(AppError::NotFound)` - No reservation with this id
    pub async fn get(&self, id: &str) -> Result<Reservation, AppError> {
        ReservationRepository::new(&self.state.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))
    }
}

/// Rejects blank purposes and trims the text.
fn validate_purpose(purpose: &str) -> Result<String, AppError> {
    let purpose = purpose.trim();
    if purpose.is_empty() {
        return Err(AppError::BadRequest("Purpose is required".to_string()));
    }

    Ok(purpose.to_string())
}

/// Normalizes optional free text, treating blank input as absent.
fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}
