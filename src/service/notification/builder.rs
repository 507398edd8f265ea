//! In-app notification titles and messages.
//!
//! Every function returns a `(title, message)` pair for one lifecycle event.

use chrono::NaiveDate;

use crate::model::room::RoomKind;

use super::ReservationContext;

/// Formats a date the way notifications and emails show it (`dd/mm/yyyy`).
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `"{room} on {date} from {start} to {end}"`
fn booking_phrase(context: &ReservationContext) -> String {
    let reservation = &context.reservation;
    format!(
        "{} on {} from {} to {}",
        context.room_label,
        display_date(reservation.date),
        reservation.time.start(),
        reservation.time.end()
    )
}

pub fn new_request(context: &ReservationContext) -> (String, String) {
    let title = match context.reservation.room.kind() {
        RoomKind::Classroom => "New Reservation Request",
        RoomKind::StudyRoom => "New Study Room Request",
    };
    let message = format!(
        "{} ({}) has requested {}.",
        context.requester.display_name(),
        context.requester.role,
        booking_phrase(context)
    );

    (title.to_string(), message)
}

pub fn modified(context: &ReservationContext) -> (String, String) {
    let message = format!(
        "{} has modified their reservation request for {}.",
        context.requester.display_name(),
        booking_phrase(context)
    );

    ("Reservation Request Modified".to_string(), message)
}

pub fn approved(context: &ReservationContext) -> (String, String) {
    let message = format!(
        "Your reservation request for {} has been approved.",
        booking_phrase(context)
    );

    ("Reservation Approved".to_string(), message)
}

pub fn rejected(context: &ReservationContext, reason: Option<&str>) -> (String, String) {
    let mut message = format!(
        "Your reservation request for {} has been rejected.",
        booking_phrase(context)
    );
    if let Some(reason) = reason.filter(|r| !r.trim().is_empty()) {
        message.push_str(&format!(" Reason: {}", reason));
    }

    ("Reservation Rejected".to_string(), message)
}

pub fn canceled_for_admin(context: &ReservationContext) -> (String, String) {
    let message = format!(
        "{} has cancelled their reservation for {}.",
        context.requester.display_name(),
        booking_phrase(context)
    );

    ("Reservation Cancelled".to_string(), message)
}

pub fn canceled_for_requester(context: &ReservationContext) -> (String, String) {
    let message = format!(
        "Your reservation for {} has been cancelled.",
        booking_phrase(context)
    );

    ("Reservation Cancelled".to_string(), message)
}
