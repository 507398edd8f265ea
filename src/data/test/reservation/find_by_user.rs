use super::*;

/// Tests listing a user's reservations.
///
/// Expected: Ok with only that user's reservations, latest date first
#[tokio::test]
async fn lists_reservations_of_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let room = factory::create_classroom(db).await?;

    let older = ReservationFactory::for_classroom(db, &room.id, user.id)
        .date(june_first())
        .build()
        .await?;
    let newer = ReservationFactory::for_classroom(db, &room.id, user.id)
        .date(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())
        .status("CANCELED")
        .build()
        .await?;
    ReservationFactory::for_classroom(db, &room.id, other.id)
        .date(june_first())
        .times("13:30", "15:00")
        .build()
        .await?;

    let reservations = ReservationRepository::new(db).find_by_user(user.id).await?;

    let ids: Vec<&str> = reservations.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, [newer.id.as_str(), older.id.as_str()]);

    Ok(())
}
