//! Normalized project fields shared by create, update and import.

use crate::error::CoreError;
use crate::status::ProjectStatus;
use crate::types::Timestamp;

/// Author recorded on rows created by the bulk import.
pub const IMPORT_AUTHOR: &str = "インポート";

/// Every writable column of a project, validated and normalized.
///
/// `equipment` is already in wire form (JSON array string). Attribution
/// (`created_by` / `updated_by`) is passed separately to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub status: ProjectStatus,
    pub company_name: String,
    pub site_name: String,
    pub equipment: String,
    pub client_contact: Option<String>,
    pub photographer: Option<String>,
    pub shoot_period: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub drawing_model: Option<String>,
    pub remarks: Option<String>,
    pub site_address: Option<String>,
}

/// Trim a required text field, rejecting blank values.
pub fn require_text(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Collapse blank optional text to `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
