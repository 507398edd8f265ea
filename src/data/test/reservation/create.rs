use super::*;

/// Tests creating a classroom reservation.
///
/// Verifies that the reservation is stored PENDING with a UUID id, zero-padded times and
/// the room reference it was created with.
///
/// Expected: Ok with reservation created
#[tokio::test]
async fn creates_pending_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_classroom(db).await?;

    let reservation = ReservationRepository::new(db)
        .create(
            user.id,
            ReservationDetails {
                room: RoomRef::Classroom(room.id.clone()),
                date: june_first(),
                time: TimeRange::parse("9:00", "10:30")?,
                purpose: "Lecture".to_string(),
                notes: Some("Bring adapters".to_string()),
            },
        )
        .await?;

    assert_eq!(reservation.id.len(), 36);
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(reservation.room, RoomRef::Classroom(room.id));
    assert_eq!(reservation.notes.as_deref(), Some("Bring adapters"));
    assert!(reservation.rejection_reason.is_none());

    let stored = entity::prelude::Reservation::find_by_id(reservation.id.as_str())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.start_time, "09:00");
    assert_eq!(stored.end_time, "10:30");
    assert!(stored.study_room_id.is_none());

    Ok(())
}

