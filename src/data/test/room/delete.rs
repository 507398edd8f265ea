use super::*;

/// Tests deleting a room.
///
/// Expected: Ok(true) on first delete, Ok(false) once the room is gone
#[tokio::test]
async fn deletes_room_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_study_room(db).await?;
    let reference = RoomRef::StudyRoom(room.id);

    let repo = RoomRepository::new(db);

    assert!(repo.delete(&reference).await?);
    assert!(repo.find_by_ref(&reference).await?.is_none());
    assert!(!repo.delete(&reference).await?);

    Ok(())
}
