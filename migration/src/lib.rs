pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_classroom_table;
mod m20250301_000003_create_study_room_table;
mod m20250301_000004_create_reservation_table;
mod m20250301_000005_create_notification_table;
mod m20250302_000006_create_booking_lock_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_classroom_table::Migration),
            Box::new(m20250301_000003_create_study_room_table::Migration),
            Box::new(m20250301_000004_create_reservation_table::Migration),
            Box::new(m20250301_000005_create_notification_table::Migration),
            Box::new(m20250302_000006_create_booking_lock_table::Migration),
        ]
    }
}
