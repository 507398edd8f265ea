//! Reservation data repository.
//!
//! Status writes are compare-and-set: every update filters on the status the caller
//! observed and reports whether a row actually changed, so a concurrent transition that
//! got there first is detected instead of overwritten.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::{
        reservation::{Reservation, ReservationDetails, ReservationStatus},
        room::RoomRef,
        user::User,
    },
};

use entity::reservation::Column;

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

/// Matches rows booked against `room`, picking the column for its kind.
fn room_condition(room: &RoomRef) -> Condition {
    match room {
        RoomRef::Classroom(id) => Condition::all().add(Column::ClassroomId.eq(id.as_str())),
        RoomRef::StudyRoom(id) => Condition::all().add(Column::StudyRoomId.eq(id.as_str())),
    }
}

fn active_statuses() -> [&'static str; 2] {
    ReservationStatus::ACTIVE.map(ReservationStatus::as_str)
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new PENDING reservation with a fresh UUID.
    ///
    /// # Arguments
    /// - `user_id` - Requesting user
    /// - `details` - Validated room, date, time, purpose and notes
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The stored reservation
    /// - `Err(AppError::DbErr)` - Insert failed
    pub async fn create(
        &self,
        user_id: i32,
        details: ReservationDetails,
    ) -> Result<Reservation, AppError> {
        let (classroom_id, study_room_id) = details.room.into_columns();

        let entity = entity::reservation::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            classroom_id: ActiveValue::Set(classroom_id),
            study_room_id: ActiveValue::Set(study_room_id),
            user_id: ActiveValue::Set(user_id),
            date: ActiveValue::Set(details.date),
            start_time: ActiveValue::Set(details.time.start().to_string()),
            end_time: ActiveValue::Set(details.time.end().to_string()),
            purpose: ActiveValue::Set(details.purpose),
            notes: ActiveValue::Set(details.notes),
            rejection_reason: ActiveValue::Set(None),
            status: ActiveValue::Set(ReservationStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Reservation::from_entity(entity)
    }

    /// Finds a reservation by id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .map(Reservation::from_entity)
            .transpose()
    }

    /// Gets the PENDING and APPROVED reservations of a room on a date.
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - Active reservations ordered by start time
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn find_active_by_room_and_date(
        &self,
        room: &RoomRef,
        date: NaiveDate,
    ) -> Result<Vec<Reservation>, AppError> {
        entity::prelude::Reservation::find()
            .filter(room_condition(room))
            .filter(Column::Date.eq(date))
            .filter(Column::Status.is_in(active_statuses()))
            .order_by_asc(Column::StartTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect()
    }

    /// Same as `find_active_by_room_and_date`, paired with each requester.
    ///
    /// # Returns
    /// - `Ok(Vec<(Reservation, Option<User>)>)` - Active reservations ordered by start time
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn find_active_by_room_and_date_with_requester(
        &self,
        room: &RoomRef,
        date: NaiveDate,
    ) -> Result<Vec<(Reservation, Option<User>)>, AppError> {
        let rows = entity::prelude::Reservation::find()
            .filter(room_condition(room))
            .filter(Column::Date.eq(date))
            .filter(Column::Status.is_in(active_statuses()))
            .order_by_asc(Column::StartTime)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter().map(with_requester).collect()
    }

    /// Gets every reservation a user has made, newest date first.
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<Reservation>, AppError> {
        entity::prelude::Reservation::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::Date)
            .order_by_asc(Column::StartTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect()
    }

    /// Gets every reservation in a status with its requester, oldest date first.
    pub async fn find_by_status(
        &self,
        status: ReservationStatus,
    ) -> Result<Vec<(Reservation, Option<User>)>, AppError> {
        let rows = entity::prelude::Reservation::find()
            .filter(Column::Status.eq(status.as_str()))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::StartTime)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter().map(with_requester).collect()
    }

    /// Moves a reservation from `from` to `to` if it is still in `from`.
    ///
    /// # Arguments
    /// - `id` - Reservation to update
    /// - `from` - Status the caller observed
    /// - `to` - New status
    /// - `rejection_reason` - Stored alongside the new status when `Some`
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - Row missing or no longer in `from`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn transition_status(
        &self,
        id: &str,
        from: ReservationStatus,
        to: ReservationStatus,
        rejection_reason: Option<String>,
    ) -> Result<bool, AppError> {
        let mut update = entity::reservation::ActiveModel {
            status: ActiveValue::Set(to.as_str().to_string()),
            ..Default::default()
        };
        if let Some(reason) = rejection_reason {
            update.rejection_reason = ActiveValue::Set(Some(reason));
        }

        let result = entity::prelude::Reservation::update_many()
            .set(update)
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Rewrites the editable details of a reservation that is still PENDING and still
    /// booked where `observed` says it is.
    ///
    /// # Arguments
    /// - `observed` - The row as the caller last read it
    /// - `details` - Replacement room, date, time, purpose and notes
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - Row missing, no longer PENDING, or moved since `observed` was read
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_details(
        &self,
        observed: &Reservation,
        details: ReservationDetails,
    ) -> Result<bool, AppError> {
        let (classroom_id, study_room_id) = details.room.into_columns();

        let result = entity::prelude::Reservation::update_many()
            .set(entity::reservation::ActiveModel {
                classroom_id: ActiveValue::Set(classroom_id),
                study_room_id: ActiveValue::Set(study_room_id),
                date: ActiveValue::Set(details.date),
                start_time: ActiveValue::Set(details.time.start().to_string()),
                end_time: ActiveValue::Set(details.time.end().to_string()),
                purpose: ActiveValue::Set(details.purpose),
                notes: ActiveValue::Set(details.notes),
                ..Default::default()
            })
            .filter(Column::Id.eq(observed.id.as_str()))
            .filter(Column::Status.eq(ReservationStatus::Pending.as_str()))
            .filter(room_condition(&observed.room))
            .filter(Column::Date.eq(observed.date))
            .filter(Column::StartTime.eq(observed.time.start().to_string()))
            .filter(Column::EndTime.eq(observed.time.end().to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

fn with_requester(
    (reservation, user): (entity::reservation::Model, Option<entity::user::Model>),
) -> Result<(Reservation, Option<User>), AppError> {
    Ok((
        Reservation::from_entity(reservation)?,
        user.map(User::from_entity).transpose()?,
    ))
}
