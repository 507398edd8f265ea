use super::*;

/// Tests that only PENDING and APPROVED reservations of the room and date are returned.
///
/// Seeds reservations in every status, on another date, and in a study room that shares
/// the classroom's id.
///
/// Expected: Ok with the two active reservations ordered by start time
#[tokio::test]
async fn returns_active_reservations_in_start_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::classroom::ClassroomFactory::new(db)
        .id("R1")
        .build()
        .await?;
    factory::study_room::StudyRoomFactory::new(db)
        .id("R1")
        .build()
        .await?;

    let late = ReservationFactory::for_classroom(db, "R1", user.id)
        .date(june_first())
        .times("14:00", "15:00")
        .status("APPROVED")
        .build()
        .await?;
    let early = ReservationFactory::for_classroom(db, "R1", user.id)
        .date(june_first())
        .times("08:00", "09:00")
        .build()
        .await?;
    for status in ["REJECTED", "CANCELED"] {
        ReservationFactory::for_classroom(db, "R1", user.id)
            .date(june_first())
            .times("10:00", "11:00")
            .status(status)
            .build()
            .await?;
    }
    ReservationFactory::for_classroom(db, "R1", user.id)
        .date(june_first().succ_opt().unwrap())
        .build()
        .await?;
    ReservationFactory::for_study_room(db, "R1", user.id)
        .date(june_first())
        .build()
        .await?;

    let active = ReservationRepository::new(db)
        .find_active_by_room_and_date(&RoomRef::Classroom("R1".to_string()), june_first())
        .await?;

    let ids: Vec<&str> = active.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, [early.id.as_str(), late.id.as_str()]);

    Ok(())
}

/// Tests the variant that pairs each reservation with its requester.
///
/// Expected: Ok with the requester attached to each reservation
#[tokio::test]
async fn attaches_requester() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Ada", "Lovelace")
        .build()
        .await?;
    let room = factory::create_study_room(db).await?;
    ReservationFactory::for_study_room(db, &room.id, user.id)
        .date(june_first())
        .build()
        .await?;

    let rows = ReservationRepository::new(db)
        .find_active_by_room_and_date_with_requester(
            &RoomRef::StudyRoom(room.id.clone()),
            june_first(),
        )
        .await?;

    assert_eq!(rows.len(), 1);
    let requester = rows[0].1.as_ref().unwrap();
    assert_eq!(requester.display_name(), "Ada Lovelace");

    Ok(())
}

/// Tests reading a row that references both room kinds.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn fails_on_row_with_two_rooms() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let classroom = factory::create_classroom(db).await?;
    let study_room = factory::create_study_room(db).await?;
    let reservation = ReservationFactory::for_classroom(db, &classroom.id, user.id)
        .date(june_first())
        .build()
        .await?;

    entity::reservation::ActiveModel {
        id: ActiveValue::Unchanged(reservation.id),
        study_room_id: ActiveValue::Set(Some(study_room.id)),
        ..Default::default()
    }
    .update(db)
    .await?;

    let result = ReservationRepository::new(db)
        .find_active_by_room_and_date(&RoomRef::Classroom(classroom.id), june_first())
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
