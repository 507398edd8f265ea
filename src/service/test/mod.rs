use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::sync::{Arc, Mutex};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::{
    error::{reservation::ReservationError, AppError},
    model::{
        notification::NotificationIcon,
        reservation::{CreateReservationParam, ReservationStatus},
        room::RoomRef,
        slot::SlotGrid,
        user::User,
    },
    service::{
        lock::RoomDayLocks,
        notification::{EmailSink, NotificationSink, ReservationContext, ReservationNotifier},
        policy::BookingPolicy,
        reservation::ReservationService,
    },
    state::AppState,
};


/// One notification captured by `RecordingNotificationSink`.
#[derive(Debug, Clone)]
struct SentNotification {
    user_id: i32,
    title: String,
    message: String,
    icon: NotificationIcon,
}

#[derive(Default)]
struct RecordingNotificationSink {
    sent: Mutex<Vec<SentNotification>>,
}

impl RecordingNotificationSink {
    fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingNotificationSink {
    async fn notify(
        &self,
        user_id: i32,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(SentNotification {
            user_id,
            title: title.to_string(),
            message: message.to_string(),
            icon,
        });
        Ok(())
    }
}

#[derive(Default)]
struct RecordingEmailSink {
    /// (recipient, status, reason)
    status_emails: Mutex<Vec<(String, ReservationStatus, Option<String>)>>,
    /// Admin emails, one entry per recipient.
    admin_emails: Mutex<Vec<String>>,
}

impl RecordingEmailSink {
    fn status_emails(&self) -> Vec<(String, ReservationStatus, Option<String>)> {
        self.status_emails.lock().unwrap().clone()
    }

    fn admin_emails(&self) -> Vec<String> {
        self.admin_emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSink for RecordingEmailSink {
    async fn send_status_email(
        &self,
        context: &ReservationContext,
        status: ReservationStatus,
        reason: Option<&str>,
    ) -> bool {
        self.status_emails.lock().unwrap().push((
            context.requester.email.clone(),
            status,
            reason.map(str::to_string),
        ));
        true
    }

    async fn notify_admins(&self, _context: &ReservationContext, admins: &[User]) -> usize {
        let mut sent = self.admin_emails.lock().unwrap();
        sent.extend(admins.iter().map(|admin| admin.email.clone()));
        admins.len()
    }
}

/// Sinks that fail every delivery.
struct FailingSink;

#[async_trait]
impl NotificationSink for FailingSink {
    async fn notify(
        &self,
        _user_id: i32,
        _title: &str,
        _message: &str,
        _icon: NotificationIcon,
    ) -> Result<(), AppError> {
        Err(AppError::BadRequest("notification service offline".to_string()))
    }
}

#[async_trait]
impl EmailSink for FailingSink {
    async fn send_status_email(
        &self,
        _context: &ReservationContext,
        _status: ReservationStatus,
        _reason: Option<&str>,
    ) -> bool {
        false
    }

    async fn notify_admins(&self, _context: &ReservationContext, _admins: &[User]) -> usize {
        0
    }
}

/// Test database plus application state wired to recording sinks.
struct Harness {
    _test: TestContext,
    db: DatabaseConnection,
    state: AppState,
    notifications: Arc<RecordingNotificationSink>,
    emails: Arc<RecordingEmailSink>,
}

impl Harness {
    async fn new() -> Self {
        Self::with_options(true, BookingPolicy::default()).await
    }

    async fn with_options(email_enabled: bool, policy: BookingPolicy) -> Self {
        let test = TestBuilder::new()
            .with_reservation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let notifications = Arc::new(RecordingNotificationSink::default());
        let emails = Arc::new(RecordingEmailSink::default());
        let state = state_with(
            &db,
            notifications.clone(),
            emails.clone(),
            email_enabled,
            policy,
        );

        Self {
            _test: test,
            db,
            state,
            notifications,
            emails,
        }
    }

    fn service(&self) -> ReservationService<'_> {
        ReservationService::new(&self.state)
    }

    async fn student(&self) -> Result<User, AppError> {
        user_with_role(&self.db, "STUDENT").await
    }

    async fn admin(&self) -> Result<User, AppError> {
        user_with_role(&self.db, "ADMIN").await
    }

    /// Inserts classroom `id` and returns its reference.
    async fn classroom(&self, id: &str) -> Result<RoomRef, AppError> {
        factory::classroom::ClassroomFactory::new(&self.db)
            .id(id)
            .room_number(format!("Room {}", id))
            .build()
            .await?;
        Ok(RoomRef::Classroom(id.to_string()))
    }

    /// Inserts study room `id` and returns its reference.
    async fn study_room(&self, id: &str) -> Result<RoomRef, AppError> {
        factory::study_room::StudyRoomFactory::new(&self.db)
            .id(id)
            .name(format!("Study {}", id))
            .build()
            .await?;
        Ok(RoomRef::StudyRoom(id.to_string()))
    }
}

fn state_with(
    db: &DatabaseConnection,
    notifications: Arc<dyn NotificationSink>,
    emails: Arc<dyn EmailSink>,
    email_enabled: bool,
    policy: BookingPolicy,
) -> AppState {
    AppState {
        db: db.clone(),
        locks: RoomDayLocks::new(),
        notifier: ReservationNotifier::new(db.clone(), notifications, emails, email_enabled),
        slot_grid: SlotGrid::default(),
        policy,
    }
}

async fn user_with_role(db: &DatabaseConnection, role: &str) -> Result<User, AppError> {
    let entity = factory::user::UserFactory::new(db).role(role).build().await?;
    User::from_entity(entity)
}

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn request(room: &RoomRef, date: NaiveDate, start: &str, end: &str) -> CreateReservationParam {
    CreateReservationParam {
        room: room.clone(),
        date,
        start_time: start.to_string(),
        end_time: end.to_string(),
        purpose: "Lecture".to_string(),
        notes: None,
    }
}

fn is_conflict(result: &Result<impl std::fmt::Debug, AppError>) -> bool {
    matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::RoomConflict { .. }))
    )
}

fn is_invalid_transition(result: &Result<impl std::fmt::Debug, AppError>) -> bool {
    matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::InvalidTransition { .. }))
    )
}
