//! Reservation factory for creating test reservation entities.
//!
//! Inserts rows directly, bypassing the booking workflow, so tests can seed arbitrary
//! states (including overlapping or historical reservations).

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::for_study_room(&db, &room.id, user.id)
///     .date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
///     .times("10:00", "11:00")
///     .status("APPROVED")
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    classroom_id: Option<String>,
    study_room_id: Option<String>,
    user_id: i32,
    date: NaiveDate,
    start_time: String,
    end_time: String,
    purpose: String,
    notes: Option<String>,
    status: String,
}

impl<'a> ReservationFactory<'a> {
    fn new(
        db: &'a DatabaseConnection,
        classroom_id: Option<String>,
        study_room_id: Option<String>,
        user_id: i32,
    ) -> Self {
        Self {
            db,
            classroom_id,
            study_room_id,
            user_id,
            date: Utc::now().date_naive(),
            start_time: "09:45".to_string(),
            end_time: "11:15".to_string(),
            purpose: "Test reservation".to_string(),
            notes: None,
            status: "PENDING".to_string(),
        }
    }

    /// Creates a factory for a classroom reservation.
    ///
    /// Defaults:
    /// - date: today (UTC)
    /// - time: `09:45`-`11:15`
    /// - purpose: `"Test reservation"`
    /// - status: `"PENDING"`
    pub fn for_classroom(
        db: &'a DatabaseConnection,
        classroom_id: impl Into<String>,
        user_id: i32,
    ) -> Self {
        Self::new(db, Some(classroom_id.into()), None, user_id)
    }

    /// Creates a factory for a study room reservation, with the same defaults as
    /// `for_classroom`.
    pub fn for_study_room(
        db: &'a DatabaseConnection,
        study_room_id: impl Into<String>,
        user_id: i32,
    ) -> Self {
        Self::new(db, None, Some(study_room_id.into()), user_id)
    }

    /// Sets the reservation date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the start and end times (`HH:MM`).
    pub fn times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    /// Sets the purpose text.
    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Sets the notes text.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the raw status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            classroom_id: ActiveValue::Set(self.classroom_id),
            study_room_id: ActiveValue::Set(self.study_room_id),
            user_id: ActiveValue::Set(self.user_id),
            date: ActiveValue::Set(self.date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            purpose: ActiveValue::Set(self.purpose),
            notes: ActiveValue::Set(self.notes),
            rejection_reason: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}
