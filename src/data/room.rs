//! Room catalogue repository.
//!
//! Classrooms and study rooms are separate tables; every method branches on the room kind
//! and returns the shared `Room` model.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::room::{CreateRoomParam, Room, RoomKind, RoomRef},
    util::parse::encode_room_features,
};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a room into the table matching its kind.
    ///
    /// # Arguments
    /// - `param` - Reference, name, type, capacity, features and image of the room
    ///
    /// # Returns
    /// - `Ok(Room)` - The stored room
    /// - `Err(AppError::DbErr)` - Insert failed (e.g. duplicate id)
    pub async fn create(&self, param: CreateRoomParam) -> Result<Room, AppError> {
        let features = encode_room_features(&param.features);
        let capacity = i32::try_from(param.capacity).map_err(|_| {
            AppError::BadRequest(format!("Capacity {} is too large", param.capacity))
        })?;

        match param.reference {
            RoomRef::Classroom(id) => {
                let entity = entity::classroom::ActiveModel {
                    id: ActiveValue::Set(id),
                    room_number: ActiveValue::Set(param.name),
                    room_type: ActiveValue::Set(param.room_type),
                    capacity: ActiveValue::Set(capacity),
                    features: ActiveValue::Set(features),
                    image: ActiveValue::Set(param.image),
                }
                .insert(self.db)
                .await?;

                Room::from_classroom(entity)
            }
            RoomRef::StudyRoom(id) => {
                let entity = entity::study_room::ActiveModel {
                    id: ActiveValue::Set(id),
                    name: ActiveValue::Set(param.name),
                    room_type: ActiveValue::Set(param.room_type),
                    capacity: ActiveValue::Set(capacity),
                    features: ActiveValue::Set(features),
                    image: ActiveValue::Set(param.image),
                }
                .insert(self.db)
                .await?;

                Room::from_study_room(entity)
            }
        }
    }

    /// Finds the room a reference points at.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Room exists
    /// - `Ok(None)` - No row with this id in the table for its kind
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn find_by_ref(&self, room: &RoomRef) -> Result<Option<Room>, AppError> {
        match room {
            RoomRef::Classroom(id) => entity::prelude::Classroom::find_by_id(id.as_str())
                .one(self.db)
                .await?
                .map(Room::from_classroom)
                .transpose(),
            RoomRef::StudyRoom(id) => entity::prelude::StudyRoom::find_by_id(id.as_str())
                .one(self.db)
                .await?
                .map(Room::from_study_room)
                .transpose(),
        }
    }

    /// Lists every room of one kind ordered by id.
    pub async fn list_by_kind(&self, kind: RoomKind) -> Result<Vec<Room>, AppError> {
        self.find_matching(kind, None, None).await
    }

    /// Lists rooms of one kind filtered by exact room type and minimum capacity.
    ///
    /// # Arguments
    /// - `kind` - Which table to search
    /// - `room_type` - Exact type to match, or `None` for any
    /// - `min_capacity` - Smallest acceptable capacity, or `None` for any
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Matching rooms ordered by id
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn find_matching(
        &self,
        kind: RoomKind,
        room_type: Option<&str>,
        min_capacity: Option<u32>,
    ) -> Result<Vec<Room>, AppError> {
        let min_capacity = min_capacity.map(i64::from);

        match kind {
            RoomKind::Classroom => {
                use entity::classroom::Column;

                let mut query = entity::prelude::Classroom::find().order_by_asc(Column::Id);
                if let Some(room_type) = room_type {
                    query = query.filter(Column::RoomType.eq(room_type));
                }
                if let Some(min) = min_capacity {
                    query = query.filter(Column::Capacity.gte(min));
                }

                query
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(Room::from_classroom)
                    .collect()
            }
            RoomKind::StudyRoom => {
                use entity::study_room::Column;

                let mut query = entity::prelude::StudyRoom::find().order_by_asc(Column::Id);
                if let Some(room_type) = room_type {
                    query = query.filter(Column::RoomType.eq(room_type));
                }
                if let Some(min) = min_capacity {
                    query = query.filter(Column::Capacity.gte(min));
                }

                query
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(Room::from_study_room)
                    .collect()
            }
        }
    }

    /// Deletes a room; its reservations cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Room deleted
    /// - `Ok(false)` - No such room
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, room: &RoomRef) -> Result<bool, AppError> {
        let result = match room {
            RoomRef::Classroom(id) => {
                entity::prelude::Classroom::delete_by_id(id.as_str())
                    .exec(self.db)
                    .await?
            }
            RoomRef::StudyRoom(id) => {
                entity::prelude::StudyRoom::delete_by_id(id.as_str())
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }
}
