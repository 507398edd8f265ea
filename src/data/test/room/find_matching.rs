use super::*;

/// Tests filtering rooms by type and minimum capacity.
///
/// Expected: Ok with only rooms of the requested type and at least the requested
/// capacity, ordered by id
#[tokio::test]
async fn filters_by_type_and_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::classroom::ClassroomFactory::new(db)
        .id("C1")
        .room_type("Lecture")
        .capacity(80)
        .build()
        .await?;
    factory::classroom::ClassroomFactory::new(db)
        .id("C2")
        .room_type("Lecture")
        .capacity(20)
        .build()
        .await?;
    factory::classroom::ClassroomFactory::new(db)
        .id("C3")
        .room_type("Lab")
        .capacity(90)
        .build()
        .await?;
    factory::classroom::ClassroomFactory::new(db)
        .id("C0")
        .room_type("Lecture")
        .capacity(30)
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    let rooms = repo
        .find_matching(RoomKind::Classroom, Some("Lecture"), Some(30))
        .await?;
    let ids: Vec<&str> = rooms.iter().map(|r| r.reference.id()).collect();
    assert_eq!(ids, ["C0", "C1"]);

    let all = repo.find_matching(RoomKind::Classroom, None, None).await?;
    assert_eq!(all.len(), 4);

    let big = repo.find_matching(RoomKind::Classroom, None, Some(85)).await?;
    assert_eq!(big.len(), 1);
    assert_eq!(big[0].reference.id(), "C3");

    Ok(())
}
