//! Study room factory for creating test study room entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test study rooms with customizable fields.
pub struct StudyRoomFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    room_type: String,
    capacity: i32,
    features: Vec<String>,
}

impl<'a> StudyRoomFactory<'a> {
    /// Creates a new StudyRoomFactory with default values.
    ///
    /// Defaults:
    /// - id: `"S{id}"`
    /// - name: `"Study Room {id}"`
    /// - room_type: `"Group"`
    /// - capacity: `6`
    /// - features: `["whiteboard"]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("S{}", id),
            name: format!("Study Room {}", id),
            room_type: "Group".to_string(),
            capacity: 6,
            features: vec!["whiteboard".to_string()],
        }
    }

    /// Sets the study room id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
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

    /// Builds and inserts the study room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::study_room::Model)` - Created study room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::study_room::Model, DbErr> {
        entity::study_room::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            room_type: ActiveValue::Set(self.room_type),
            capacity: ActiveValue::Set(self.capacity),
            features: ActiveValue::Set(serde_json::json!(self.features).to_string()),
            image: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a study room with default values.
pub async fn create_study_room(
    db: &DatabaseConnection,
) -> Result<entity::study_room::Model, DbErr> {
    StudyRoomFactory::new(db).build().await
}
