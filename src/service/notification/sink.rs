//! Database-backed in-app notification sink.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    data::notification::NotificationRepository, error::AppError,
    model::notification::NotificationIcon,
};

use super::NotificationSink;

/// Stores notifications in the `notification` table.
#[derive(Clone)]
pub struct DatabaseNotificationSink {
    db: DatabaseConnection,
}

impl DatabaseNotificationSink {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationSink for DatabaseNotificationSink {
    async fn notify(
        &self,
        user_id: i32,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), AppError> {
        NotificationRepository::new(&self.db)
            .create(user_id, title, message, icon)
            .await?;

        Ok(())
    }
}
