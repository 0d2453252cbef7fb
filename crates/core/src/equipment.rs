//! Equipment list codec.
//!
//! A project's equipment is an ordered list of names. It is persisted and
//! transmitted as a JSON array encoded into a string (`"[\"FARO\",\"Pro3\"]"`)
//! and decoded back into a list at every boundary.

use crate::error::CoreError;

/// Equipment names known to the master table, in analytics display order.
pub const KNOWN_EQUIPMENT: &[&str] = &["FARO", "L2pro", "Pro3", "RTC", "BLK", "Pro2"];

/// Wire value for an empty list.
pub const EMPTY_EQUIPMENT: &str = "[]";

/// Encode an equipment list into its wire string.
pub fn encode(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| EMPTY_EQUIPMENT.to_string())
}

/// Decode a wire string into an equipment list.
///
/// An empty (or whitespace-only) string decodes as an empty list.
pub fn decode(raw: &str) -> Result<Vec<String>, CoreError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Vec<String>>(raw)
        .map_err(|e| CoreError::Validation(format!("equipment must be a JSON array of strings: {e}")))
}

/// Normalize a wire string: validates it decodes and re-encodes it.
///
/// `None` and empty strings become `"[]"`.
pub fn normalize(raw: Option<&str>) -> Result<String, CoreError> {
    match raw {
        Some(raw) => decode(raw).map(|items| encode(&items)),
        None => Ok(EMPTY_EQUIPMENT.to_string()),
    }
}
