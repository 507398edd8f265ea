use sea_orm::entity::prelude::*;

/// Exactly one of `classroom_id` / `study_room_id` is set on every row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub classroom_id: Option<String>,
    pub study_room_id: Option<String>,
    pub user_id: i32,
    pub date: Date,
    /// Zero-padded `HH:MM`.
    pub start_time: String,
    /// Zero-padded `HH:MM`.
    pub end_time: String,
    pub purpose: String,
    pub notes: Option<String>,
    pub rejection_reason: Option<String>,
    /// One of `PENDING`, `APPROVED`, `REJECTED`, `CANCELED`.
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classroom::Entity",
        from = "Column::ClassroomId",
        to = "super::classroom::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Classroom,
    #[sea_orm(
        belongs_to = "super::study_room::Entity",
        from = "Column::StudyRoomId",
        to = "super::study_room::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    StudyRoom,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::classroom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classroom.def()
    }
}

impl Related<super::study_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyRoom.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
