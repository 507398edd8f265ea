use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;

use crate::error::{internal::InternalError, AppError};

/// Parses the JSON array stored in a room's `features` column
///
/// An empty column is treated as an empty set.
///
/// # Arguments
/// - `value` - Raw column value, e.g. `["projector","whiteboard"]`
///
/// # Returns
/// - `Ok(BTreeSet<String>)` - Parsed amenity tags
/// - `Err(AppError::InternalErr(InvalidStoredValue))` - Column is not a JSON string array
pub fn parse_room_features(value: String) -> Result<BTreeSet<String>, AppError> {
    if value.trim().is_empty() {
        return Ok(BTreeSet::new());
    }

    let parsed = serde_json::from_str::<BTreeSet<String>>(&value);

    let features = parsed.map_err(|e| InternalError::InvalidStoredValue {
        column: "features",
        value,
        reason: e.to_string(),
    })?;

    Ok(features)
}

/// Serializes amenity tags for the `features` column
pub fn encode_room_features(features: &BTreeSet<String>) -> String {
    serde_json::Value::from(features.iter().cloned().collect::<Vec<_>>()).to_string()
}

/// Today's date in the server's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
