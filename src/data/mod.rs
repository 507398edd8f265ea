//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each and convert entity rows into the
//! domain models of `crate::model` at this boundary. They are generic over
//! `ConnectionTrait` so the same queries run on a pooled connection or inside a booking
//! transaction.

pub mod booking_lock;
pub mod notification;
pub mod reservation;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;
