//! Reservation email composition.
//!
//! Delivery transport lives outside this crate; `LogEmailSink` composes each message and
//! hands it to the log so deployments without a mail relay still record what would have
//! been sent.

use async_trait::async_trait;

use crate::model::{reservation::ReservationStatus, user::User};

use super::{builder::display_date, EmailSink, ReservationContext};

const SIGNATURE: &str = "Best regards,\nCampusRoom Management System";

/// A composed email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// `"HH:MM to HH:MM"`
fn time_phrase(context: &ReservationContext) -> String {
    format!(
        "{} to {}",
        context.reservation.time.start(),
        context.reservation.time.end()
    )
}

/// Composes the email sent to the requester when a reservation changes status.
///
/// # Returns
/// - `Some(EmailMessage)` - For APPROVED, REJECTED and CANCELED
/// - `None` - PENDING has no status email
pub fn compose_status_email(
    context: &ReservationContext,
    status: ReservationStatus,
    reason: Option<&str>,
) -> Option<EmailMessage> {
    let reservation = &context.reservation;
    let greeting = format!("Hello {},\n\n", context.requester.first_name);
    let date = display_date(reservation.date);
    let time = time_phrase(context);

    let (subject, body) = match status {
        ReservationStatus::Approved => (
            "Your Reservation Has Been Approved",
            format!(
                "{greeting}We're pleased to inform you that your reservation request for {room} on {date} from {time} has been approved.\n\n\
                 Reservation Details:\n\
                 - Room: {room}\n\
                 - Date: {date}\n\
                 - Time: {time}\n\
                 - Purpose: {purpose}\n\n\
                 Please arrive on time and ensure the room is left in good condition after use.\n\n\
                 {SIGNATURE}",
                room = context.room_label,
                purpose = reservation.purpose,
            ),
        ),
        ReservationStatus::Rejected => {
            let reason = reason
                .filter(|r| !r.trim().is_empty())
                .map(|r| format!("Reason: {}\n\n", r))
                .unwrap_or_default();
            (
                "Your Reservation Has Been Declined",
                format!(
                    "{greeting}We regret to inform you that your reservation request for {room} on {date} from {time} has been declined.\n\n\
                     {reason}\
                     You may submit a new request for another time slot or contact the administrator for more information.\n\n\
                     {SIGNATURE}",
                    room = context.room_label,
                ),
            )
        }
        ReservationStatus::Canceled => (
            "Reservation Cancellation Confirmation",
            format!(
                "{greeting}This is to confirm that your reservation for {room} on {date} from {time} has been cancelled as requested.\n\n\
                 If this was done in error, please submit a new reservation request.\n\n\
                 {SIGNATURE}",
                room = context.room_label,
            ),
        ),
        ReservationStatus::Pending => return None,
    };

    Some(EmailMessage {
        to: context.requester.email.clone(),
        subject: subject.to_string(),
        body,
    })
}

/// Composes the email telling one administrator about a new request.
pub fn compose_admin_email(context: &ReservationContext, admin: &User) -> EmailMessage {
    let reservation = &context.reservation;
    let notes = reservation.notes.as_deref().unwrap_or("None");

    let body = format!(
        "Hello {admin},\n\n\
         A new reservation request has been submitted with the following details:\n\n\
         Requester: {requester} ({role})\n\
         Room: {room}\n\
         Date: {date}\n\
         Time: {time}\n\
         Purpose: {purpose}\n\
         Additional Notes: {notes}\n\n\
         Please log in to the CampusRoom Management System to review and process this request.\n\n\
         {SIGNATURE}",
        admin = admin.first_name,
        requester = context.requester.display_name(),
        role = context.requester.role,
        room = context.room_label,
        date = display_date(reservation.date),
        time = time_phrase(context),
        purpose = reservation.purpose,
    );

    EmailMessage {
        to: admin.email.clone(),
        subject: "New Reservation Request".to_string(),
        body,
    }
}

/// Email sink that writes each composed message to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEmailSink;

#[async_trait]
impl EmailSink for LogEmailSink {
    async fn send_status_email(
        &self,
        context: &ReservationContext,
        status: ReservationStatus,
        reason: Option<&str>,
    ) -> bool {
        match compose_status_email(context, status, reason) {
            Some(email) => {
                tracing::info!("Email to {}: {}\n{}", email.to, email.subject, email.body);
                true
            }
            None => false,
        }
    }

    async fn notify_admins(&self, context: &ReservationContext, admins: &[User]) -> usize {
        for admin in admins {
            let email = compose_admin_email(context, admin);
            tracing::info!("Email to {}: {}\n{}", email.to, email.subject, email.body);
        }

        admins.len()
    }
}
