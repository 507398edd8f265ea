//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories insert rows
//! through the given connection, so foreign keys must already exist (use
//! `helpers::create_reservation_with_dependencies` when the test doesn't care).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let room = factory::create_classroom(&db).await?;
//! let reservation = factory::reservation::ReservationFactory::for_classroom(&db, &room.id, user.id)
//!     .times("10:00", "11:00")
//!     .status("APPROVED")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `classroom` - Create classroom entities
//! - `study_room` - Create study room entities
//! - `reservation` - Create reservation entities against either room kind
//! - `helpers` - ID generation and dependency helpers

pub mod classroom;
pub mod helpers;
pub mod reservation;
pub mod study_room;
pub mod user;

pub use classroom::create_classroom;
pub use study_room::create_study_room;
pub use user::{create_admin, create_user};
