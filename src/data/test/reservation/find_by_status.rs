use super::*;

/// Tests listing reservations by status.
///
/// Expected: Ok with only PENDING reservations paired with their requesters
#[tokio::test]
async fn lists_pending_reservations_with_requesters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, classroom, pending) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    ReservationFactory::for_classroom(db, &classroom.id, user.id)
        .times("13:30", "15:00")
        .status("APPROVED")
        .build()
        .await?;

    let rows = ReservationRepository::new(db)
        .find_by_status(ReservationStatus::Pending)
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, pending.id);
    assert_eq!(rows[0].1.as_ref().map(|u| u.id), Some(user.id));

    Ok(())
}
