use super::*;

/// Tests resolving references of both kinds.
///
/// Verifies that the same id in the two tables resolves to different rooms depending on
/// the reference variant.
///
/// Expected: Ok(Some) with the room of the matching kind
#[tokio::test]
async fn resolves_room_by_kind() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::classroom::ClassroomFactory::new(db)
        .id("1")
        .room_number("A-101")
        .build()
        .await?;
    factory::study_room::StudyRoomFactory::new(db)
        .id("1")
        .name("Quiet Pod")
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    let classroom = repo.find_by_ref(&RoomRef::Classroom("1".to_string())).await?;
    let study_room = repo.find_by_ref(&RoomRef::StudyRoom("1".to_string())).await?;

    assert_eq!(classroom.map(|r| r.name), Some("A-101".to_string()));
    assert_eq!(study_room.map(|r| r.name), Some("Quiet Pod".to_string()));

    Ok(())
}

/// Tests resolving a reference to a missing room.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = RoomRepository::new(db)
        .find_by_ref(&RoomRef::StudyRoom("missing".to_string()))
        .await?;

    assert!(room.is_none());

    Ok(())
}
