//! Reservation notification dispatch.
//!
//! This module provides the `ReservationNotifier` which turns reservation lifecycle events
//! into in-app notifications and emails. Dispatch always runs after the state change has
//! been committed and is best-effort: failures are logged and counted in a
//! `DispatchReport`, never returned as errors.
//!
//! The notifier is organized into separate modules by concern:
//! - `builder` - Notification titles and messages
//! - `email` - Email composition and the logging email sink
//! - `sink` - Database-backed in-app notification sink

pub mod builder;
pub mod email;
pub mod sink;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::{
        notification::NotificationIcon,
        reservation::{Reservation, ReservationStatus},
        room::RoomKind,
        user::User,
    },
    service::room::RoomService,
};

/// Destination for in-app notifications.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Delivers one notification to one user.
    async fn notify(
        &self,
        user_id: i32,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), AppError>;
}

/// Destination for reservation emails. Results are advisory.
#[async_trait]
pub trait EmailSink: Send + Sync {
    /// Sends the requester an email about a status change.
    ///
    /// # Returns
    /// - `true` - Email handed off for delivery
    /// - `false` - Email could not be sent
    async fn send_status_email(
        &self,
        context: &ReservationContext,
        status: ReservationStatus,
        reason: Option<&str>,
    ) -> bool;

    /// Emails every administrator about a new request.
    ///
    /// # Returns
    /// - `usize` - Number of administrators successfully emailed
    async fn notify_admins(&self, context: &ReservationContext, admins: &[User]) -> usize;
}

/// A reservation resolved with the data every message needs.
#[derive(Debug, Clone)]
pub struct ReservationContext {
    pub reservation: Reservation,
    pub requester: User,
    /// Room number or name, `"N/A"` when the room no longer resolves.
    pub room_label: String,
}

/// Outcome counts of one dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub notifications_sent: usize,
    pub notifications_failed: usize,
    pub emails_sent: usize,
    pub emails_failed: usize,
}

/// Dispatches notifications and emails for reservation lifecycle events.
///
/// Holds its own connection handle so it can be cloned into application state and used
/// after the booking transaction has been committed.
#[derive(Clone)]
pub struct ReservationNotifier {
    db: DatabaseConnection,
    notifications: Arc<dyn NotificationSink>,
    emails: Arc<dyn EmailSink>,
    email_enabled: bool,
}

impl ReservationNotifier {
    /// Creates a new notifier.
    ///
    /// # Arguments
    /// - `db` - Connection used to resolve requesters, room labels and administrators
    /// - `notifications` - In-app notification sink
    /// - `emails` - Email sink
    /// - `email_enabled` - When false no email is sent
    pub fn new(
        db: DatabaseConnection,
        notifications: Arc<dyn NotificationSink>,
        emails: Arc<dyn EmailSink>,
        email_enabled: bool,
    ) -> Self {
        Self {
            db,
            notifications,
            emails,
            email_enabled,
        }
    }

    /// Notifies and emails administrators about a new request.
    pub async fn reservation_created(&self, reservation: &Reservation) -> DispatchReport {
        let mut report = DispatchReport::default();
        let Some(context) = self.load_context(reservation).await else {
            return report;
        };
        let Some(admins) = self.load_admins().await else {
            return report;
        };

        let (title, message) = builder::new_request(&context);
        let icon = match context.reservation.room.kind() {
            RoomKind::Classroom => NotificationIcon::NewRequest,
            RoomKind::StudyRoom => NotificationIcon::NewStudyRoomRequest,
        };
        for admin in &admins {
            self.send(&mut report, admin.id, &title, &message, icon).await;
        }

        if self.email_enabled && !admins.is_empty() {
            let sent = self.emails.notify_admins(&context, &admins).await;
            report.emails_sent += sent;
            report.emails_failed += admins.len().saturating_sub(sent);
            tracing::info!(
                "Emailed {}/{} administrators about reservation {}",
                sent,
                admins.len(),
                reservation.id
            );
        }

        report
    }

    /// Notifies administrators that a pending request was edited.
    pub async fn reservation_modified(&self, reservation: &Reservation) -> DispatchReport {
        let mut report = DispatchReport::default();
        let Some(context) = self.load_context(reservation).await else {
            return report;
        };
        let Some(admins) = self.load_admins().await else {
            return report;
        };

        let (title, message) = builder::modified(&context);
        for admin in &admins {
            self.send(&mut report, admin.id, &title, &message, NotificationIcon::Modified)
                .await;
        }

        report
    }

    /// Notifies and emails the requester about an approval.
    pub async fn reservation_approved(&self, reservation: &Reservation) -> DispatchReport {
        let mut report = DispatchReport::default();
        let Some(context) = self.load_context(reservation).await else {
            return report;
        };

        let (title, message) = builder::approved(&context);
        self.send(
            &mut report,
            context.requester.id,
            &title,
            &message,
            NotificationIcon::Approved,
        )
        .await;
        self.send_status_email(&mut report, &context, ReservationStatus::Approved, None)
            .await;

        report
    }

    /// Notifies and emails the requester about a rejection.
    pub async fn reservation_rejected(
        &self,
        reservation: &Reservation,
        reason: Option<&str>,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();
        let Some(context) = self.load_context(reservation).await else {
            return report;
        };

        let (title, message) = builder::rejected(&context, reason);
        self.send(
            &mut report,
            context.requester.id,
            &title,
            &message,
            NotificationIcon::Rejected,
        )
        .await;
        self.send_status_email(&mut report, &context, ReservationStatus::Rejected, reason)
            .await;

        report
    }

    /// Notifies administrators and the requester about a cancellation and emails the
    /// requester a confirmation.
    pub async fn reservation_canceled(&self, reservation: &Reservation) -> DispatchReport {
        let mut report = DispatchReport::default();
        let Some(context) = self.load_context(reservation).await else {
            return report;
        };

        if let Some(admins) = self.load_admins().await {
            let (title, message) = builder::canceled_for_admin(&context);
            for admin in &admins {
                self.send(&mut report, admin.id, &title, &message, NotificationIcon::Canceled)
                    .await;
            }
        }

        let (title, message) = builder::canceled_for_requester(&context);
        self.send(
            &mut report,
            context.requester.id,
            &title,
            &message,
            NotificationIcon::Canceled,
        )
        .await;
        self.send_status_email(&mut report, &context, ReservationStatus::Canceled, None)
            .await;

        report
    }

    /// Resolves the requester and room label of a reservation.
    ///
    /// Returns `None` (after logging) when the requester cannot be loaded, since every
    /// message names them.
    async fn load_context(&self, reservation: &Reservation) -> Option<ReservationContext> {
        let requester = match UserRepository::new(&self.db)
            .find_by_id(reservation.user_id)
            .await
        {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!(
                    "Requester {} of reservation {} not found, skipping notifications",
                    reservation.user_id,
                    reservation.id
                );
                return None;
            }
            Err(e) => {
                tracing::error!(
                    "Failed to load requester of reservation {}: {}",
                    reservation.id,
                    e
                );
                return None;
            }
        };

        let room_label = match RoomService::new(&self.db).label_for(&reservation.room).await {
            Ok(label) => label,
            Err(e) => {
                tracing::warn!("Failed to resolve {}: {}", reservation.room, e);
                crate::model::room::UNKNOWN_LABEL.to_string()
            }
        };

        Some(ReservationContext {
            reservation: reservation.clone(),
            requester,
            room_label,
        })
    }

    async fn load_admins(&self) -> Option<Vec<User>> {
        match UserRepository::new(&self.db).get_all_admins().await {
            Ok(admins) => Some(admins),
            Err(e) => {
                tracing::error!("Failed to load administrators: {}", e);
                None
            }
        }
    }

    async fn send(
        &self,
        report: &mut DispatchReport,
        user_id: i32,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) {
        match self.notifications.notify(user_id, title, message, icon).await {
            Ok(()) => report.notifications_sent += 1,
            Err(e) => {
                report.notifications_failed += 1;
                tracing::error!("Failed to notify user {} ({}): {}", user_id, title, e);
            }
        }
    }

    async fn send_status_email(
        &self,
        report: &mut DispatchReport,
        context: &ReservationContext,
        status: ReservationStatus,
        reason: Option<&str>,
    ) {
        if !self.email_enabled {
            return;
        }

        if self.emails.send_status_email(context, status, reason).await {
            report.emails_sent += 1;
        } else {
            report.emails_failed += 1;
            tracing::warn!(
                "Failed to send {} email for reservation {} to {}",
                status,
                context.reservation.id,
                context.requester.email
            );
        }
    }
}
