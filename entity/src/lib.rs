//! SeaORM entity models for the campus room booking schema.

pub mod prelude;

pub mod booking_lock;
pub mod classroom;
pub mod notification;
pub mod reservation;
pub mod study_room;
pub mod user;
