//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use survey_core::dates;
use survey_core::equipment;
use survey_core::error::CoreError;
use survey_core::project::{optional_text, require_text, ProjectDraft};
use survey_core::status::ProjectStatus;
use survey_core::types::{DbId, Timestamp};
use validator::Validate;

/// A project row from the `projects` table, in wire form.
///
/// `equipment` stays a JSON-encoded string; clients decode it.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    #[sqlx(try_from = "String")]
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
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub created_by: String,
    pub updated_by: String,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    /// Defaults to 未見積 if omitted.
    pub status: Option<ProjectStatus>,
    #[validate(length(min = 1, max = 255))]
    pub company_name: String,
    #[validate(length(min = 1, max = 255))]
    pub site_name: String,
    /// JSON-encoded equipment list; defaults to `"[]"`.
    pub equipment: Option<String>,
    pub client_contact: Option<String>,
    pub photographer: Option<String>,
    pub shoot_period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub drawing_model: Option<String>,
    pub remarks: Option<String>,
    pub site_address: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub created_by: String,
}

/// DTO for replacing an existing project.
///
/// Updates are full replacements: required fields must be present and any
/// omitted optional field is cleared. Extra fields such as `id` or
/// `createdAt` are ignored, so a client may send back the whole object.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub status: ProjectStatus,
    #[validate(length(min = 1, max = 255))]
    pub company_name: String,
    #[validate(length(min = 1, max = 255))]
    pub site_name: String,
    pub equipment: Option<String>,
    pub client_contact: Option<String>,
    pub photographer: Option<String>,
    pub shoot_period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub drawing_model: Option<String>,
    pub remarks: Option<String>,
    pub site_address: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub updated_by: String,
}

/// Fields shared by both DTOs, borrowed for normalization.
struct RawFields<'a> {
    status: ProjectStatus,
    company_name: &'a str,
    site_name: &'a str,
    equipment: Option<&'a str>,
    client_contact: Option<&'a str>,
    photographer: Option<&'a str>,
    shoot_period: Option<&'a str>,
    start_date: Option<&'a str>,
    end_date: Option<&'a str>,
    drawing_model: Option<&'a str>,
    remarks: Option<&'a str>,
    site_address: Option<&'a str>,
}

impl RawFields<'_> {
    fn into_draft(self) -> Result<ProjectDraft, CoreError> {
        Ok(ProjectDraft {
            status: self.status,
            company_name: require_text("companyName", Some(self.company_name))?,
            site_name: require_text("siteName", Some(self.site_name))?,
            equipment: equipment::normalize(self.equipment)?,
            client_contact: optional_text(self.client_contact),
            photographer: optional_text(self.photographer),
            shoot_period: optional_text(self.shoot_period),
            start_date: dates::parse_optional(self.start_date)?,
            end_date: dates::parse_optional(self.end_date)?,
            drawing_model: optional_text(self.drawing_model),
            remarks: optional_text(self.remarks),
            site_address: optional_text(self.site_address),
        })
    }
}

fn validate(input: &impl Validate) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))
}

impl CreateProject {
    /// Validate the DTO and return `(draft, created_by)`.
    pub fn into_draft(self) -> Result<(ProjectDraft, String), CoreError> {
        validate(&self)?;
        let author = require_text("createdBy", Some(&self.created_by))?;
        let draft = RawFields {
            status: self.status.unwrap_or_default(),
            company_name: &self.company_name,
            site_name: &self.site_name,
            equipment: self.equipment.as_deref(),
            client_contact: self.client_contact.as_deref(),
            photographer: self.photographer.as_deref(),
            shoot_period: self.shoot_period.as_deref(),
            start_date: self.start_date.as_deref(),
            end_date: self.end_date.as_deref(),
            drawing_model: self.drawing_model.as_deref(),
            remarks: self.remarks.as_deref(),
            site_address: self.site_address.as_deref(),
        }
        .into_draft()?;
        Ok((draft, author))
    }
}

impl UpdateProject {
    /// Validate the DTO and return `(draft, updated_by)`.
    pub fn into_draft(self) -> Result<(ProjectDraft, String), CoreError> {
        validate(&self)?;
        let author = require_text("updatedBy", Some(&self.updated_by))?;
        let draft = RawFields {
            status: self.status,
            company_name: &self.company_name,
            site_name: &self.site_name,
            equipment: self.equipment.as_deref(),
            client_contact: self.client_contact.as_deref(),
            photographer: self.photographer.as_deref(),
            shoot_period: self.shoot_period.as_deref(),
            start_date: self.start_date.as_deref(),
            end_date: self.end_date.as_deref(),
            drawing_model: self.drawing_model.as_deref(),
            remarks: self.remarks.as_deref(),
            site_address: self.site_address.as_deref(),
        }
        .into_draft()?;
        Ok((draft, author))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn create_defaults_status_and_equipment() {
        let input: CreateProject = serde_json::from_value(json!({
            "companyName": "タクマ",
            "siteName": "新江東",
            "startDate": "",
            "createdBy": "管理者"
        }))
        .unwrap();
        let (draft, author) = input.into_draft().unwrap();
        assert_eq!(draft.status, ProjectStatus::Unquoted);
        assert_eq!(draft.equipment, "[]");
        assert_eq!(draft.start_date, None);
        assert_eq!(author, "管理者");
    }

    #[test]
    fn create_rejects_blank_company() {
        let input: CreateProject = serde_json::from_value(json!({
            "companyName": "",
            "siteName": "新江東",
            "createdBy": "管理者"
        }))
        .unwrap();
        assert_matches!(input.into_draft(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn update_ignores_read_only_fields_and_clears_omitted_optionals() {
        let input: UpdateProject = serde_json::from_value(json!({
            "id": 7,
            "createdAt": "2025-01-01T00:00:00Z",
            "status": "日程決",
            "companyName": "タクマ",
            "siteName": "新江東",
            "equipment": "[\"FARO\",\"Pro3\"]",
            "updatedBy": "山根"
        }))
        .unwrap();
        let (draft, author) = input.into_draft().unwrap();
        assert_eq!(draft.status, ProjectStatus::Scheduled);
        assert_eq!(draft.equipment, r#"["FARO","Pro3"]"#);
        assert_eq!(draft.remarks, None);
        assert_eq!(author, "山根");
    }

    #[test]
    fn update_rejects_bad_equipment_encoding() {
        let input: UpdateProject = serde_json::from_value(json!({
            "status": "完了",
            "companyName": "A",
            "siteName": "B",
            "equipment": "FARO",
            "updatedBy": "山根"
        }))
        .unwrap();
        assert!(input.into_draft().is_err());
    }

    #[test]
    fn project_serializes_camel_case() {
        let now = chrono::Utc::now();
        let project = Project {
            id: 1,
            status: ProjectStatus::Completed,
            company_name: "タクマ".into(),
            site_name: "新江東".into(),
            equipment: r#"["FARO"]"#.into(),
            client_contact: None,
            photographer: Some("山根・伊藤".into()),
            shoot_period: Some("1/20-1/22".into()),
            start_date: None,
            end_date: None,
            drawing_model: None,
            remarks: None,
            site_address: None,
            created_at: now,
            updated_at: now,
            created_by: "管理者".into(),
            updated_by: "山根".into(),
        };
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["companyName"], "タクマ");
        assert_eq!(json["status"], "完了");
        assert_eq!(json["equipment"], r#"["FARO"]"#);
        assert!(json["startDate"].is_null());
    }
}
