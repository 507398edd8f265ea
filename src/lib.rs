//! Classroom and study room reservation engine.
//!
//! Rooms come in two kinds (classrooms and study rooms) and are booked by date and
//! `HH:MM` window. The engine decides availability, prevents double-booking under
//! concurrent requests, drives the reservation status machine and dispatches the
//! notifications and emails that accompany each change.
//!
//! Layers:
//! - `model` - Domain types and pure booking rules
//! - `data` - SeaORM repositories
//! - `service` - Booking workflow built on the repositories
//! - `config`, `startup`, `state` - Process wiring

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
