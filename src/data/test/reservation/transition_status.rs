use super::*;

/// Tests a status change from the observed status.
///
/// Expected: Ok(true) and the stored status updated
#[tokio::test]
async fn updates_status_when_still_in_observed_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let changed = repo
        .transition_status(
            &reservation.id,
            ReservationStatus::Pending,
            ReservationStatus::Approved,
            None,
        )
        .await?;

    assert!(changed);
    let stored = repo.find_by_id(&reservation.id).await?.unwrap();
    assert_eq!(stored.status, ReservationStatus::Approved);
    assert!(stored.rejection_reason.is_none());

    Ok(())
}

/// Tests that a stale observed status leaves the row untouched.
///
/// Simulates losing a race: the reservation was already rejected when the caller tries
/// to approve it from PENDING.
///
/// Expected: Ok(false) and the stored status unchanged
#[tokio::test]
async fn does_not_overwrite_concurrent_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    assert!(
        repo.transition_status(
            &reservation.id,
            ReservationStatus::Pending,
            ReservationStatus::Rejected,
            Some("Room under maintenance".to_string()),
        )
        .await?
    );

    let changed = repo
        .transition_status(
            &reservation.id,
            ReservationStatus::Pending,
            ReservationStatus::Approved,
            None,
        )
        .await?;

    assert!(!changed);
    let stored = repo.find_by_id(&reservation.id).await?.unwrap();
    assert_eq!(stored.status, ReservationStatus::Rejected);
    assert_eq!(
        stored.rejection_reason.as_deref(),
        Some("Room under maintenance")
    );
    assert!(stored.notes.is_none());

    Ok(())
}

/// Tests transitioning a reservation that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let changed = ReservationRepository::new(db)
        .transition_status(
            "missing",
            ReservationStatus::Pending,
            ReservationStatus::Canceled,
            None,
        )
        .await?;

    assert!(!changed);

    Ok(())
}
