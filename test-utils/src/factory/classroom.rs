//! Classroom factory for creating test classroom entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classrooms with customizable fields.
pub struct ClassroomFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    room_number: String,
    room_type: String,
    capacity: i32,
    features: Vec<String>,
}

impl<'a> ClassroomFactory<'a> {
    /// Creates a new ClassroomFactory with default values.
    ///
    /// Defaults:
    /// - id: `"C{id}"`
    /// - room_number: `"Room {id}"`
    /// - room_type: `"Lecture"`
    /// - capacity: `30`
    /// - features: `["projector"]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("C{}", id),
            room_number: format!("Room {}", id),
            room_type: "Lecture".to_string(),
            capacity: 30,
            features: vec!["projector".to_string()],
        }
    }

    /// Sets the classroom id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the human-readable room number.
    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    /// Sets the room type.
    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    /// Sets the seating capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the amenity tags.
    pub fn features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Builds and inserts the classroom entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::classroom::Model)` - Created classroom entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::classroom::Model, DbErr> {
        entity::classroom::ActiveModel {
            id: ActiveValue::Set(self.id),
            room_number: ActiveValue::Set(self.room_number),
            room_type: ActiveValue::Set(self.room_type),
            capacity: ActiveValue::Set(self.capacity),
            features: ActiveValue::Set(serde_json::json!(self.features).to_string()),
            image: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a classroom with default values.
pub async fn create_classroom(db: &DatabaseConnection) -> Result<entity::classroom::Model, DbErr> {
    ClassroomFactory::new(db).build().await
}
