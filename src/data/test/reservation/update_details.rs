use super::*;

/// Tests moving a pending reservation to another room kind, date and time.
///
/// Expected: Ok(true) with the classroom column cleared and the study room column set
#[tokio::test]
async fn rewrites_pending_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _classroom, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let study_room = factory::create_study_room(db).await?;

    let repo = ReservationRepository::new(db);
    let observed = repo.find_by_id(&reservation.id).await?.unwrap();
    let changed = repo
        .update_details(
            &observed,
            ReservationDetails {
                room: RoomRef::StudyRoom(study_room.id.clone()),
                date: june_first(),
                time: TimeRange::parse("15:15", "16:45")?,
                purpose: "Study group".to_string(),
                notes: None,
            },
        )
        .await?;

    assert!(changed);
    let stored = repo.find_by_id(&reservation.id).await?.unwrap();
    assert_eq!(stored.room, RoomRef::StudyRoom(study_room.id));
    assert_eq!(stored.date, june_first());
    assert_eq!(stored.time.to_string(), "15:15 - 16:45");
    assert_eq!(stored.purpose, "Study group");
    assert_eq!(stored.status, ReservationStatus::Pending);

    Ok(())
}

/// Tests that approved reservations cannot be rewritten.
///
/// Expected: Ok(false) with the row unchanged
#[tokio::test]
async fn ignores_non_pending_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_classroom(db).await?;
    let reservation = ReservationFactory::for_classroom(db, &room.id, user.id)
        .date(june_first())
        .times("08:00", "09:30")
        .status("APPROVED")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let observed = repo.find_by_id(&reservation.id).await?.unwrap();
    let changed = repo
        .update_details(
            &observed,
            ReservationDetails {
                room: RoomRef::Classroom(room.id.clone()),
                date: june_first(),
                time: TimeRange::parse("10:00", "11:00")?,
                purpose: "Moved".to_string(),
                notes: None,
            },
        )
        .await?;

    assert!(!changed);
    let stored = repo.find_by_id(&reservation.id).await?.unwrap();
    assert_eq!(stored.time.to_string(), "08:00 - 09:30");
    assert_eq!(stored.purpose, "Test reservation");

    Ok(())
}

/// Tests that a write based on an outdated read of the row is refused.
///
/// Expected: Ok(false) when the row was moved after it was read, leaving the newer
/// time in place
#[tokio::test]
async fn ignores_write_from_outdated_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_classroom(db).await?;
    let reservation = ReservationFactory::for_classroom(db, &room.id, user.id)
        .date(june_first())
        .times("09:00", "10:00")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let outdated = repo.find_by_id(&reservation.id).await?.unwrap();

    let moved = repo
        .update_details(
            &outdated,
            ReservationDetails {
                room: RoomRef::Classroom(room.id.clone()),
                date: june_first(),
                time: TimeRange::parse("11:00", "12:00")?,
                purpose: outdated.purpose.clone(),
                notes: None,
            },
        )
        .await?;
    assert!(moved);

    let changed = repo
        .update_details(
            &outdated,
            ReservationDetails {
                room: RoomRef::Classroom(room.id.clone()),
                date: june_first(),
                time: TimeRange::parse("09:00", "10:00")?,
                purpose: "Renamed".to_string(),
                notes: None,
            },
        )
        .await?;

    assert!(!changed);
    let stored = repo.find_by_id(&reservation.id).await?.unwrap();
    assert_eq!(stored.time.to_string(), "11:00 - 12:00");
    assert_ne!(stored.purpose, "Renamed");

    Ok(())
}
