use super::*;

/// Tests retrieving all admin users.
///
/// Verifies that the repository returns all users with the ADMIN role in id order
/// and excludes professors and students.
///
/// Expected: Ok with vector containing only admin users
#[tokio::test]
async fn returns_only_admin_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin1 = factory::create_admin(db).await?;
    factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .role("PROFESSOR")
        .build()
        .await?;
    let admin2 = factory::create_admin(db).await?;

    let admins = UserRepository::new(db).get_all_admins().await?;

    assert_eq!(admins.len(), 2);
    assert!(admins.iter().all(|u| u.is_admin()));
    assert_eq!(admins[0].id, admin1.id);
    assert_eq!(admins[1].id, admin2.id);

    Ok(())
}

/// Tests retrieving admins when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let admins = UserRepository::new(db).get_all_admins().await?;

    assert!(admins.is_empty());

    Ok(())
}
