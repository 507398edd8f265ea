use chrono::Datelike;
use std::collections::HashMap;

use crate::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::{
        reservation::{DemandFilter, Reservation, ReservationStatus, ReservationSummary},
        room::{RoomRef, UNKNOWN_LABEL},
        user::User,
    },
    service::room::RoomService,
};

use super::ReservationService;

impl<'a> ReservationService<'a> {
    /// Lists a user's own reservations, newest date first.
    pub async fn list_for_user(&self, user: &User) -> Result<Vec<ReservationSummary>, AppError> {
        let reservations = ReservationRepository::new(&self.state.db)
            .find_by_user(user.id)
            .await?;

        let rows = reservations
            .into_iter()
            .map(|reservation| (reservation, Some(user.clone())))
            .collect();

        self.summarize(rows).await
    }

    /// Lists every reservation in a status, oldest date first.
    pub async fn list_by_status(
        &self,
        status: ReservationStatus,
    ) -> Result<Vec<ReservationSummary>, AppError> {
        let rows = ReservationRepository::new(&self.state.db)
            .find_by_status(status)
            .await?;

        self.summarize(rows).await
    }

    /// Lists the pending requests awaiting an administrator decision.
    ///
    /// # Arguments
    /// - `filter` - Optional requester role and calendar month (1-12, any year)
    ///
    /// # Returns
    /// - `Ok(Vec<ReservationSummary>)` - Matching PENDING reservations, oldest date first
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn pending_demands(
        &self,
        filter: DemandFilter,
    ) -> Result<Vec<ReservationSummary>, AppError> {
        let rows = ReservationRepository::new(&self.state.db)
            .find_by_status(ReservationStatus::Pending)
            .await?
            .into_iter()
            .filter(|(reservation, requester)| {
                let role_matches = match filter.role {
                    Some(role) => requester.as_ref().is_some_and(|user| user.role == role),
                    None => true,
                };
                let month_matches = filter
                    .month
                    .map_or(true, |month| reservation.date.month() == month);

                role_matches && month_matches
            })
            .collect();

        self.summarize(rows).await
    }

    /// Enriches reservations with room labels and requester names.
    async fn summarize(
        &self,
        rows: Vec<(Reservation, Option<User>)>,
    ) -> Result<Vec<ReservationSummary>, AppError> {
        let rooms = RoomService::new(&self.state.db);
        let mut labels: HashMap<RoomRef, String> = HashMap::new();
        let mut summaries = Vec::with_capacity(rows.len());

        for (reservation, requester) in rows {
            let room_label = match labels.get(&reservation.room) {
                Some(label) => label.clone(),
                None => {
                    let label = rooms.label_for(&reservation.room).await?;
                    labels.insert(reservation.room.clone(), label.clone());
                    label
                }
            };

            summaries.push(ReservationSummary {
                id: reservation.id,
                room: reservation.room,
                room_label,
                requester_name: requester
                    .as_ref()
                    .map(User::display_name)
                    .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
                requester_role: requester.as_ref().map(|user| user.role),
                date: reservation.date,
                time: reservation.time.to_string(),
                status: reservation.status,
                purpose: reservation.purpose,
                notes: reservation.notes,
                rejection_reason: reservation.rejection_reason,
                created_at: reservation.created_at,
            });
        }

        Ok(summaries)
    }
}
