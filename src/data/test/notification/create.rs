use super::*;

/// Tests storing notifications and reading them back per user.
///
/// Expected: Ok with unread notifications carrying the icon class and colour
#[tokio::test]
async fn stores_unread_notification_with_icon() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    repo.create(
        user.id,
        "Reservation Approved",
        "Your reservation has been approved",
        NotificationIcon::Approved,
    )
    .await?;
    repo.create(other.id, "Other", "Other", NotificationIcon::Modified)
        .await?;

    let notifications = repo.get_by_user(user.id).await?;

    assert_eq!(notifications.len(), 1);
    let notification = &notifications[0];
    assert_eq!(notification.title, "Reservation Approved");
    assert_eq!(notification.icon_class, "fas fa-check-circle");
    assert_eq!(notification.icon_color, "green");
    assert!(!notification.is_read);

    Ok(())
}

/// Tests notifying a user that does not exist.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NotificationRepository::new(db)
        .create(4242, "Title", "Message", NotificationIcon::Canceled)
        .await;

    assert!(result.is_err());

    Ok(())
}
