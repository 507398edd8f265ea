//! In-app notification repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::notification::{Notification, NotificationIcon};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores an unread notification for a user.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The stored notification
    /// - `Err(DbErr)` - Insert failed (e.g. unknown user)
    pub async fn create(
        &self,
        user_id: i32,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(title.to_string()),
            message: ActiveValue::Set(message.to_string()),
            icon_class: ActiveValue::Set(icon.css_class().to_string()),
            icon_color: ActiveValue::Set(icon.color().to_string()),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets a user's notifications in creation order.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Notification>, DbErr> {
        let notifications = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_asc(entity::notification::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Notification::from_entity)
            .collect();

        Ok(notifications)
    }
}
