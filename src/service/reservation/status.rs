use crate::{
    data::reservation::ReservationRepository,
    error::{reservation::ReservationError, AppError},
    model::{
        reservation::{Reservation, ReservationAction},
        user::User,
    },
    util::parse::today,
};

use super::{non_blank, ReservationService};

impl<'a> ReservationService<'a> {
    /// Approves a PENDING reservation.
    ///
    /// # Arguments
    /// - `actor` - Must be an administrator
    /// - `id` - Reservation to approve
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The APPROVED reservation
    /// - `Err(AppError::ReservationErr(Unauthorized))` - Actor is not an administrator
    /// - `Err(AppError::NotFound)` - No such reservation
    /// - `Err(AppError::ReservationErr(InvalidTransition))` - Not PENDING
    pub async fn approve(&self, actor: &User, id: &str) -> Result<Reservation, AppError> {
        require_admin(actor, id)?;

        let reservation = self
            .transition(id, ReservationAction::Approve, None)
            .await?;

        tracing::info!("Admin {} approved reservation {}", actor.id, id);

        self.state.notifier.reservation_approved(&reservation).await;

        Ok(reservation)
    }

    /// Rejects a PENDING reservation, recording an optional reason.
    ///
    /// A blank reason is treated as no reason.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The REJECTED reservation
    /// - `Err(AppError::ReservationErr(Unauthorized))` - Actor is not an administrator
    /// - `Err(AppError::NotFound)` - No such reservation
    /// - `Err(AppError::ReservationErr(InvalidTransition))` - Not PENDING
    pub async fn reject(
        &self,
        actor: &User,
        id: &str,
        reason: Option<String>,
    ) -> Result<Reservation, AppError> {
        require_admin(actor, id)?;

        let reason = non_blank(reason);
        let reservation = self
            .transition(id, ReservationAction::Reject, reason.clone())
            .await?;

        tracing::info!("Admin {} rejected reservation {}", actor.id, id);

        self.state
            .notifier
            .reservation_rejected(&reservation, reason.as_deref())
            .await;

        Ok(reservation)
    }

    /// Cancels a PENDING or APPROVED reservation that is not in the past.
    ///
    /// # Arguments
    /// - `actor` - The owner of the reservation or an administrator
    /// - `id` - Reservation to cancel
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The CANCELED reservation
    /// - `Err(AppError::NotFound)` - No such reservation
    /// - `Err(AppError::ReservationErr(Unauthorized))` - Actor neither owns it nor is admin
    /// - `Err(AppError::ReservationErr(PastDate))` - Reservation date is before today
    /// - `Err(AppError::ReservationErr(InvalidTransition))` - Already REJECTED or CANCELED
    pub async fn cancel(&self, actor: &User, id: &str) -> Result<Reservation, AppError> {
        let current = self.get(id).await?;

        if current.user_id != actor.id && !actor.is_admin() {
            return Err(ReservationError::Unauthorized {
                user_id: actor.id,
                reservation_id: current.id,
            }
            .into());
        }
        if current.date < today() {
            return Err(ReservationError::PastDate {
                reservation_id: current.id,
                date: current.date,
            }
            .into());
        }

        let reservation = self.transition(id, ReservationAction::Cancel, None).await?;

        tracing::info!("User {} cancelled reservation {}", actor.id, id);

        self.state.notifier.reservation_canceled(&reservation).await;

        Ok(reservation)
    }

    /// Applies a status action with a compare-and-set on the observed status.
    ///
    /// Losing the race against a concurrent change is reported as an invalid transition
    /// from the status that won.
    async fn transition(
        &self,
        id: &str,
        action: ReservationAction,
        rejection_reason: Option<String>,
    ) -> Result<Reservation, AppError> {
        let repo = ReservationRepository::new(&self.state.db);
        let current = self.get(id).await?;
        let target = current.status.apply(action)?;

        if !repo
            .transition_status(id, current.status, target, rejection_reason)
            .await?
        {
            let latest = self.get(id).await?;
            return Err(ReservationError::InvalidTransition {
                from: latest.status,
                action,
            }
            .into());
        }

        self.get(id).await
    }
}

fn require_admin(actor: &User, id: &str) -> Result<(), ReservationError> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(ReservationError::Unauthorized {
            user_id: actor.id,
            reservation_id: id.to_string(),
        })
    }
}
