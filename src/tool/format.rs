// ABOUTME: JSON rendering for tool output - two-space indented, stable key order.

use serde::Serialize;

use crate::error::BvbrcError;

/// Render `value` as pretty JSON with two-space indentation.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, BvbrcError> {
    Ok(serde_json::to_string_pretty(value)?)
}
