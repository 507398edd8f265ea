use super::*;

/// Tests looking up a user by email.
///
/// Expected: Ok(Some) for a known address, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("ada@campus.test")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("ada@campus.test").await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));

    let missing = repo.find_by_email("nobody@campus.test").await?;
    assert!(missing.is_none());

    Ok(())
}
