//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pending classroom reservation together with its requester and room.
///
/// All entities are created with default values. Use the individual factories if you
/// need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, classroom, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::classroom::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let classroom = crate::factory::classroom::create_classroom(db).await?;
    let reservation =
        crate::factory::reservation::ReservationFactory::for_classroom(db, &classroom.id, user.id)
            .build()
            .await?;

    Ok((user, classroom, reservation))
}
