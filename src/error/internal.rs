use thiserror::Error;

/// Internal issues indicating corrupt stored data or possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A reservation row references both room kinds or neither.
    #[error("Reservation {reservation_id} must reference exactly one classroom or study room")]
    InvalidRoomReference {
        /// The reservation whose room columns are inconsistent
        reservation_id: String,
    },

    /// A stored column holds a value the domain model cannot represent.
    #[error("Invalid stored value '{value}' in column {column}: {reason}")]
    InvalidStoredValue {
        /// Column the value was read from
        column: &'static str,
        /// The raw stored value
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}
