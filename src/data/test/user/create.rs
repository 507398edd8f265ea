use super::*;

/// Tests registering a new user.
///
/// Verifies that the stored user carries the given names, email and role and is
/// marked ACTIVE.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@campus.test".to_string(),
            role: Role::Professor,
        })
        .await?;

    assert_eq!(user.display_name(), "Grace Hopper");
    assert_eq!(user.role, Role::Professor);
    assert_eq!(user.status, "ACTIVE");

    Ok(())
}

/// Tests registering two users with the same email.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            first_name: "Other".to_string(),
            last_name: "Person".to_string(),
            email: existing.email,
            role: Role::Student,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
