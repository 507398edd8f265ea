use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Value is not a valid 24-hour `HH:MM` clock time.
    #[error("Invalid time format '{value}', expected HH:MM")]
    InvalidFormat {
        /// The rejected input
        value: String,
    },
}
