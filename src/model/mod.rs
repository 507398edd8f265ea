//! Domain models and operation parameters.
//!
//! Entity rows from the `entity` crate are converted into these types at the repository
//! boundary; nothing above the data layer works with raw storage columns.

pub mod notification;
pub mod reservation;
pub mod room;
pub mod slot;
pub mod time_range;
pub mod user;
