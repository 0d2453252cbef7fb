//! Bulk import records.
//!
//! Spreadsheet rows arrive keyed by the column headings used in the
//! office's schedule sheet. Each row is deserialized into an
//! [`ImportRecord`] and validated into a [`ProjectDraft`] before any row is
//! written; rows that fail are skipped by the caller.

use serde::Deserialize;
use serde_json::Value;

use crate::dates;
use crate::equipment;
use crate::error::CoreError;
use crate::project::{optional_text, require_text, ProjectDraft};
use crate::status::ProjectStatus;

/// Key of the record array in the import request body.
pub const BATCH_KEY: &str = "projects";

/// Equipment column: either an encoded JSON string or a plain list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ImportEquipment {
    Encoded(String),
    List(Vec<String>),
}

/// One spreadsheet row. Only 会社名 and 現場名 are required.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImportRecord {
    #[serde(rename = "進捗状況")]
    pub status: Option<String>,
    #[serde(rename = "会社名")]
    pub company_name: Option<String>,
    #[serde(rename = "現場名")]
    pub site_name: Option<String>,
    #[serde(rename = "機材")]
    pub equipment: Option<ImportEquipment>,
    #[serde(rename = "撮影担当")]
    pub photographer: Option<String>,
    #[serde(rename = "撮影期間")]
    pub shoot_period: Option<String>,
    #[serde(rename = "撮影開始日")]
    pub start_date: Option<String>,
    #[serde(rename = "撮影終了日")]
    pub end_date: Option<String>,
    #[serde(rename = "備考")]
    pub remarks: Option<String>,
    #[serde(rename = "現場住所")]
    pub site_address: Option<String>,
}

/// Extract the record array from an import request body.
///
/// Returns `None` when the body has no `projects` array.
pub fn batch_rows(body: &Value) -> Option<&[Value]> {
    body.get(BATCH_KEY)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}

impl ImportRecord {
    /// Deserialize a single loosely-typed row.
    pub fn from_value(row: &Value) -> Result<Self, CoreError> {
        ImportRecord::deserialize(row)
            .map_err(|e| CoreError::Validation(format!("malformed import row: {e}")))
    }

    /// Validate and normalize the row.
    ///
    /// Blank status defaults to 未見積 and missing equipment to an empty list.
    pub fn into_draft(self) -> Result<ProjectDraft, CoreError> {
        let company_name = require_text("会社名", self.company_name.as_deref())?;
        let site_name = require_text("現場名", self.site_name.as_deref())?;

        let status = match optional_text(self.status.as_deref()) {
            Some(label) => label.parse()?,
            None => ProjectStatus::default(),
        };

        let equipment = match self.equipment {
            Some(ImportEquipment::Encoded(raw)) => equipment::normalize(Some(&raw))?,
            Some(ImportEquipment::List(items)) => equipment::encode(&items),
            None => equipment::EMPTY_EQUIPMENT.to_string(),
        };

        Ok(ProjectDraft {
            status,
            company_name,
            site_name,
            equipment,
            client_contact: None,
            photographer: optional_text(self.photographer.as_deref()),
            shoot_period: optional_text(self.shoot_period.as_deref()),
            start_date: dates::parse_optional(self.start_date.as_deref())?,
            end_date: dates::parse_optional(self.end_date.as_deref())?,
            drawing_model: None,
            remarks: optional_text(self.remarks.as_deref()),
            site_address: optional_text(self.site_address.as_deref()),
        })
    }
}
