use super::*;

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some) with matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .name("Alan", "Turing")
        .role("PROFESSOR")
        .build()
        .await?;

    let user = UserRepository::new(db).find_by_id(created.id).await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.first_name, "Alan");
    assert_eq!(user.role, Role::Professor);

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).find_by_id(9999).await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests reading a user whose stored role is unknown.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .role("JANITOR")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_id(created.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
