//! In-app notification hints.

/// Icon shown next to an in-app notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIcon {
    Approved,
    Rejected,
    Canceled,
    NewRequest,
    NewStudyRoomRequest,
    Modified,
}

impl NotificationIcon {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Approved => "fas fa-check-circle",
            Self::Rejected => "fas fa-times-circle",
            Self::Canceled => "fas fa-calendar-times",
            Self::NewRequest => "fas fa-calendar-plus",
            Self::NewStudyRoomRequest => "fas fa-book",
            Self::Modified => "fas fa-edit",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Approved => "green",
            Self::Rejected => "red",
            Self::Canceled | Self::Modified => "orange",
            Self::NewRequest | Self::NewStudyRoomRequest => "blue",
        }
    }
}

/// Stored in-app notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub icon_class: String,
    pub icon_color: String,
    pub is_read: bool,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            message: entity.message,
            icon_class: entity.icon_class,
            icon_color: entity.icon_color,
            is_read: entity.is_read,
        }
    }
}
