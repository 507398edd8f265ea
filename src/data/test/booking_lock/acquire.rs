use super::*;

/// Tests acquiring the same lock row repeatedly.
///
/// Verifies that the upsert keeps exactly one row per room and date, and that rooms of
/// different kinds with the same id get separate rows.
///
/// Expected: Ok with one row per (room key, date)
#[tokio::test]
async fn keeps_one_row_per_room_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BookingLock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let classroom = RoomRef::Classroom("1".to_string());
    let study_room = RoomRef::StudyRoom("1".to_string());

    let repo = BookingLockRepository::new(db);
    repo.acquire(&classroom, date).await?;
    repo.acquire(&classroom, date).await?;
    repo.acquire(&study_room, date).await?;
    repo.acquire(&classroom, date.succ_opt().unwrap()).await?;

    let count = entity::prelude::BookingLock::find().count(db).await?;
    assert_eq!(count, 3);

    let row = entity::prelude::BookingLock::find_by_id(("classroom:1".to_string(), date))
        .one(db)
        .await?;
    assert!(row.is_some());

    Ok(())
}
