use super::*;

fn param(reference: RoomRef) -> CreateRoomParam {
    CreateRoomParam {
        reference,
        name: "B-204".to_string(),
        room_type: "Lab".to_string(),
        capacity: 24,
        features: ["computers", "projector"]
            .into_iter()
            .map(String::from)
            .collect::<BTreeSet<_>>(),
        image: Some("b204.jpg".to_string()),
    }
}

/// Tests creating a classroom.
///
/// Verifies that the room lands in the classroom table with its features and can be
/// read back through its reference.
///
/// Expected: Ok with classroom created
#[tokio::test]
async fn creates_classroom() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let room = repo
        .create(param(RoomRef::Classroom("B204".to_string())))
        .await?;

    assert_eq!(room.reference, RoomRef::Classroom("B204".to_string()));
    assert_eq!(room.name, "B-204");
    assert_eq!(room.capacity, 24);
    assert!(room.features.contains("computers"));

    let stored = entity::prelude::Classroom::find_by_id("B204")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.features, r#"["computers","projector"]"#);

    Ok(())
}

/// Tests creating a study room.
///
/// Expected: Ok with study room created and classroom table untouched
#[tokio::test]
async fn creates_study_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let room = repo
        .create(param(RoomRef::StudyRoom("S9".to_string())))
        .await?;

    assert_eq!(room.reference.kind(), RoomKind::StudyRoom);
    assert!(repo.list_by_kind(RoomKind::Classroom).await?.is_empty());
    assert_eq!(repo.list_by_kind(RoomKind::StudyRoom).await?.len(), 1);

    Ok(())
}
