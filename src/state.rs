//! Application state shared by every service call.
//!
//! The state is built once at startup and cloned cheaply wherever it is needed:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `RoomDayLocks` and `ReservationNotifier` share their internals through `Arc`
//! - `SlotGrid` and `BookingPolicy` are small configuration values

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    config::Config,
    model::slot::SlotGrid,
    service::{
        lock::RoomDayLocks,
        notification::{
            email::LogEmailSink, sink::DatabaseNotificationSink, ReservationNotifier,
        },
        policy::BookingPolicy,
    },
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
    /// Per-room, per-day booking locks shared by every booking task of this process.
    pub locks: RoomDayLocks,
    /// Dispatches notifications and emails after reservation changes.
    pub notifier: ReservationNotifier,
    /// Daily booking grid for slot boards.
    pub slot_grid: SlotGrid,
    /// Advance-booking and duration limits.
    pub policy: BookingPolicy,
}

impl AppState {
    /// Creates application state with the database-backed notification sink and the
    /// logging email sink.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - New application state instance
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        let notifier = ReservationNotifier::new(
            db.clone(),
            Arc::new(DatabaseNotificationSink::new(db.clone())),
            Arc::new(LogEmailSink),
            config.email_notifications,
        );

        Self {
            db,
            locks: RoomDayLocks::new(),
            notifier,
            slot_grid: config.slot_grid.clone(),
            policy: config.booking_policy(),
        }
    }
}
