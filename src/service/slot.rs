//! Daily slot board for a room.

use chrono::NaiveDate;
use sea_orm::ConnectionTrait;

use crate::{
    data::{reservation::ReservationRepository, room::RoomRepository},
    error::AppError,
    model::{
        room::{Bookable, UNKNOWN_LABEL},
        slot::{enumerate_slots, SlotGrid, TimeSlot},
    },
};

pub struct SlotService<'a, C: ConnectionTrait> {
    db: &'a C,
    grid: &'a SlotGrid,
}

impl<'a, C: ConnectionTrait> SlotService<'a, C> {
    pub fn new(db: &'a C, grid: &'a SlotGrid) -> Self {
        Self { db, grid }
    }

    /// Lists every grid slot of a room on a date with its availability.
    ///
    /// A slot is taken when any PENDING or APPROVED reservation overlaps it; the holder
    /// is the requester of the earliest-starting such reservation. Computed fresh on every
    /// call.
    ///
    /// # Arguments
    /// - `room` - Classroom or study room
    /// - `date` - Day to enumerate
    ///
    /// # Returns
    /// - `Ok(Vec<TimeSlot>)` - One entry per grid slot, in grid order
    /// - `Err(AppError::NotFound)` - The room does not exist
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn list_time_slots(
        &self,
        room: &impl Bookable,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, AppError> {
        let room = room.room_ref();
        if RoomRepository::new(self.db).find_by_ref(room).await?.is_none() {
            return Err(AppError::NotFound(format!("{} not found", room)));
        }

        let booked: Vec<_> = ReservationRepository::new(self.db)
            .find_active_by_room_and_date_with_requester(room, date)
            .await?
            .into_iter()
            .map(|(reservation, requester)| {
                let name = requester
                    .map(|user| user.display_name())
                    .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
                (reservation.time, name)
            })
            .collect();

        Ok(enumerate_slots(self.grid, &booked))
    }

    /// Lists only the free grid slots of a room on a date.
    pub async fn available_time_slots(
        &self,
        room: &impl Bookable,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, AppError> {
        let slots = self.list_time_slots(room, date).await?;

        Ok(slots.into_iter().filter(|slot| slot.available).collect())
    }
}
