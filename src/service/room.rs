//! Room catalogue and available-room search.

use sea_orm::ConnectionTrait;

use crate::{
    data::room::RoomRepository,
    error::AppError,
    model::{
        room::{CreateRoomParam, Room, RoomKind, RoomRef, RoomSearch, UNKNOWN_LABEL},
        time_range::TimeRange,
    },
    service::availability::AvailabilityService,
};

pub struct RoomService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a room to the catalogue.
    ///
    /// # Returns
    /// - `Ok(Room)` - The stored room
    /// - `Err(AppError::BadRequest)` - Blank id or name
    /// - `Err(AppError::DbErr)` - Insert failed (e.g. duplicate id)
    pub async fn create(&self, param: CreateRoomParam) -> Result<Room, AppError> {
        if param.reference.id().trim().is_empty() {
            return Err(AppError::BadRequest("Room id must not be blank".to_string()));
        }
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Room name must not be blank".to_string()));
        }

        let room = RoomRepository::new(self.db).create(param).await?;

        tracing::info!("Added {} ({})", room.reference, room.name);

        Ok(room)
    }

    /// Gets a room, failing when it does not exist.
    ///
    /// # Returns
    /// - `Ok(Room)` - The room
    /// - `Err(AppError::NotFound)` - No such room
    pub async fn get(&self, room: &RoomRef) -> Result<Room, AppError> {
        RoomRepository::new(self.db)
            .find_by_ref(room)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} not found", room)))
    }

    /// Lists every room of one kind.
    pub async fn list(&self, kind: RoomKind) -> Result<Vec<Room>, AppError> {
        RoomRepository::new(self.db).list_by_kind(kind).await
    }

    /// Removes a room and, by cascade, its reservations.
    ///
    /// # Returns
    /// - `Ok(())` - Room deleted
    /// - `Err(AppError::NotFound)` - No such room
    pub async fn delete(&self, room: &RoomRef) -> Result<(), AppError> {
        if !RoomRepository::new(self.db).delete(room).await? {
            return Err(AppError::NotFound(format!("{} not found", room)));
        }

        tracing::info!("Removed {}", room);

        Ok(())
    }

    /// Display label of a room, or `"N/A"` when it cannot be resolved.
    pub async fn label_for(&self, room: &RoomRef) -> Result<String, AppError> {
        let label = RoomRepository::new(self.db)
            .find_by_ref(room)
            .await?
            .map(|room| room.name)
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

        Ok(label)
    }

    /// Finds rooms of a kind that match the filters and are free for the window.
    ///
    /// # Arguments
    /// - `search` - Kind, date, window, optional room type and minimum capacity
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Matching free rooms ordered by id
    /// - `Err(AppError::TimeErr)` / `Err(AppError::ReservationErr)` - Invalid window
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn find_available_rooms(&self, search: RoomSearch) -> Result<Vec<Room>, AppError> {
        let range = TimeRange::parse(&search.start_time, &search.end_time)?;

        let candidates = RoomRepository::new(self.db)
            .find_matching(search.kind, search.room_type.as_deref(), search.min_capacity)
            .await?;

        let availability = AvailabilityService::new(self.db);
        let mut available = Vec::new();
        for room in candidates {
            if availability.is_available(&room, search.date, &range).await? {
                available.push(room);
            }
        }

        Ok(available)
    }
}
