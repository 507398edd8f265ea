use sea_orm::{DatabaseTransaction, TransactionTrait};
use std::collections::BTreeSet;

use crate::{
    data::{
        booking_lock::BookingLockRepository, reservation::ReservationRepository,
        room::RoomRepository,
    },
    error::{reservation::ReservationError, AppError},
    model::{
        reservation::{
            EditReservationParam, Reservation, ReservationAction, ReservationDetails,
            ReservationStatus,
        },
        time_range::{ClockTime, TimeRange},
        user::User,
    },
    service::conflict::ConflictGuard,
    util::parse::today,
};

use super::{non_blank, validate_purpose, ReservationService};

/// Times an edit re-reads a reservation that moved while it waited for its locks.
const EDIT_ATTEMPTS: usize = 3;

impl<'a> ReservationService<'a> {
    /// Edits a PENDING reservation owned by the actor.
    ///
    /// Fields left as `None` keep their stored value. The old and the new room/day are
    /// locked, then the reservation is read again inside the transaction and the edit is
    /// applied on top of that row. If it was moved to another room or date in the
    /// meantime, the locks no longer cover it and the edit starts over. When the room,
    /// date or time changes, the booking policy and the conflict guard run again for the
    /// new booking, excluding the reservation itself. Administrators are notified after
    /// commit.
    ///
    /// # Arguments
    /// - `actor` - The requesting user; must own the reservation
    /// - `id` - Reservation to edit
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated reservation
    /// - `Err(AppError::NotFound)` - Reservation or new room does not exist
    /// - `Err(AppError::ReservationErr(Unauthorized))` - Actor does not own it
    /// - `Err(AppError::ReservationErr(InvalidTransition))` - No longer PENDING
    /// - `Err(AppError::ReservationErr(RoomConflict))` - New booking overlaps another
    /// - `Err(AppError::ReservationErr(ConcurrentModification))` - Kept moving under the edit
    /// - `Err(AppError)` - Invalid input, policy violation or database error
    pub async fn edit(
        &self,
        actor: &User,
        id: &str,
        param: EditReservationParam,
    ) -> Result<Reservation, AppError> {
        let mut observed = self.get(id).await?;

        for _ in 0..EDIT_ATTEMPTS {
            authorize_edit(actor, &observed)?;

            let target = merge_details(&observed, param.clone())?;
            let keys: BTreeSet<_> = [
                (observed.room.clone(), observed.date),
                (target.room, target.date),
            ]
            .into_iter()
            .collect();

            let guard = self.state.locks.acquire_all(keys.iter().cloned()).await;
            let txn = self.state.db.begin().await?;

            let lock_repo = BookingLockRepository::new(&txn);
            for (room, date) in &keys {
                lock_repo.acquire(room, *date).await?;
            }

            let current = ReservationRepository::new(&txn)
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))?;

            if current.room != observed.room || current.date != observed.date {
                tracing::debug!(
                    "Reservation {} moved to {} on {} before the edit was locked, retrying",
                    id,
                    current.room,
                    current.date
                );
                observed = current;
                continue;
            }

            let updated = self.apply_edit(&txn, actor, current, param).await?;

            txn.commit().await?;
            drop(guard);

            tracing::info!(
                "User {} edited reservation {} ({} on {}, {})",
                actor.id,
                updated.id,
                updated.room,
                updated.date,
                updated.time
            );

            self.state.notifier.reservation_modified(&updated).await;

            return Ok(updated);
        }

        Err(ReservationError::ConcurrentModification {
            reservation_id: id.to_string(),
        }
        .into())
    }

    /// Validates and writes an edit against the row read under the booking locks.
    async fn apply_edit(
        &self,
        txn: &DatabaseTransaction,
        actor: &User,
        current: Reservation,
        param: EditReservationParam,
    ) -> Result<Reservation, AppError> {
        authorize_edit(actor, &current)?;

        let details = merge_details(&current, param)?;
        let moved = details.room != current.room
            || details.date != current.date
            || details.time != current.time;

        if moved {
            self.state.policy.check(today(), details.date, &details.time)?;
            if RoomRepository::new(txn)
                .find_by_ref(&details.room)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(format!("{} not found", details.room)));
            }
            ConflictGuard::new(txn)
                .assert_no_conflict(
                    &details.room,
                    details.date,
                    &details.time,
                    Some(current.id.as_str()),
                )
                .await?;
        }

        let repo = ReservationRepository::new(txn);
        if !repo.update_details(&current, details).await? {
            return Err(lost_edit_race(txn, &current.id).await);
        }

        repo.find_by_id(&current.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", current.id)))
    }
}

/// Only the owner may edit, and only while the reservation is PENDING.
fn authorize_edit(actor: &User, reservation: &Reservation) -> Result<(), AppError> {
    if reservation.user_id != actor.id {
        return Err(ReservationError::Unauthorized {
            user_id: actor.id,
            reservation_id: reservation.id.clone(),
        }
        .into());
    }
    reservation.status.apply(ReservationAction::Edit)?;
    Ok(())
}

/// Applies the requested changes on top of the stored reservation.
fn merge_details(
    current: &Reservation,
    param: EditReservationParam,
) -> Result<ReservationDetails, AppError> {
    let start = match param.start_time {
        Some(start) => ClockTime::parse(&start)?,
        None => current.time.start(),
    };
    let end = match param.end_time {
        Some(end) => ClockTime::parse(&end)?,
        None => current.time.end(),
    };
    let purpose = match param.purpose {
        Some(purpose) => validate_purpose(&purpose)?,
        None => current.purpose.clone(),
    };
    let notes = match param.notes {
        Some(notes) => non_blank(Some(notes)),
        None => current.notes.clone(),
    };

    Ok(ReservationDetails {
        room: param.room.unwrap_or_else(|| current.room.clone()),
        date: param.date.unwrap_or(current.date),
        time: TimeRange::new(start, end)?,
        purpose,
        notes,
    })
}

/// Builds the error for an edit whose compare-and-set matched no row.
async fn lost_edit_race(txn: &DatabaseTransaction, id: &str) -> AppError {
    match ReservationRepository::new(txn).find_by_id(id).await {
        Ok(Some(reservation)) if reservation.status == ReservationStatus::Pending => {
            ReservationError::ConcurrentModification {
                reservation_id: reservation.id,
            }
            .into()
        }
        Ok(Some(reservation)) => ReservationError::InvalidTransition {
            from: reservation.status,
            action: ReservationAction::Edit,
        }
        .into(),
        Ok(None) => AppError::NotFound(format!("Reservation {} not found", id)),
        Err(e) => e,
    }
}
