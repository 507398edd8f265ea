//! Business logic services.
//!
//! Services compose repositories into the booking workflow: availability and conflict
//! checks, slot boards, room search, the reservation state machine and its notification
//! side effects.

pub mod availability;
pub mod conflict;
pub mod lock;
pub mod notification;
pub mod policy;
pub mod reservation;
pub mod room;
pub mod slot;

#[cfg(test)]
mod test;
