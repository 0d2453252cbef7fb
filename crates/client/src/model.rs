//! Wire and in-memory representations of a project.
//!
//! On the wire `equipment` is a JSON array encoded into a string; views
//! work with a plain list. [`ProjectWire`] ↔ [`Project`] conversion happens
//! at every boundary crossing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use survey_core::equipment;
use survey_core::error::CoreError;
use survey_core::status::ProjectStatus;
use survey_core::types::{DbId, Timestamp};

/// A project exactly as the API serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWire {
    pub id: DbId,
    pub status: ProjectStatus,
    pub company_name: String,
    pub site_name: String,
    #[serde(default)]
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

/// A project as the views see it.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: DbId,
    pub status: ProjectStatus,
    pub company_name: String,
    pub site_name: String,
    pub equipment: Vec<String>,
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

impl TryFrom<ProjectWire> for Project {
    type Error = CoreError;

    fn try_from(wire: ProjectWire) -> Result<Self, Self::Error> {
        Ok(Project {
            equipment: equipment::decode(&wire.equipment)?,
            id: wire.id,
            status: wire.status,
            company_name: wire.company_name,
            site_name: wire.site_name,
            client_contact: wire.client_contact,
            photographer: wire.photographer,
            shoot_period: wire.shoot_period,
            start_date: wire.start_date,
            end_date: wire.end_date,
            drawing_model: wire.drawing_model,
            remarks: wire.remarks,
            site_address: wire.site_address,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            created_by: wire.created_by,
            updated_by: wire.updated_by,
        })
    }
}

/// Editable fields of the shared create/edit form.
///
/// `author` is sent as `createdBy` on create and `updatedBy` on update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectForm {
    pub status: ProjectStatus,
    pub company_name: String,
    pub site_name: String,
    pub equipment: Vec<String>,
    pub client_contact: Option<String>,
    pub photographer: Option<String>,
    pub shoot_period: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub drawing_model: Option<String>,
    pub remarks: Option<String>,
    pub site_address: Option<String>,
    pub author: String,
}

impl ProjectForm {
    /// Pre-fill the form from an existing project for editing.
    pub fn from_project(project: &Project, author: impl Into<String>) -> Self {
        Self {
            status: project.status,
            company_name: project.company_name.clone(),
            site_name: project.site_name.clone(),
            equipment: project.equipment.clone(),
            client_contact: project.client_contact.clone(),
            photographer: project.photographer.clone(),
            shoot_period: project.shoot_period.clone(),
            start_date: project.start_date.map(|d| d.date_naive()),
            end_date: project.end_date.map(|d| d.date_naive()),
            drawing_model: project.drawing_model.clone(),
            remarks: project.remarks.clone(),
            site_address: project.site_address.clone(),
            author: author.into(),
        }
    }

    /// Request body for `POST /api/projects`.
    pub(crate) fn to_create_body(&self) -> FormBody<'_> {
        FormBody {
            created_by: Some(&self.author),
            updated_by: None,
            ..self.body()
        }
    }

    /// Request body for `PUT /api/projects/{id}`.
    pub(crate) fn to_update_body(&self) -> FormBody<'_> {
        FormBody {
            created_by: None,
            updated_by: Some(&self.author),
            ..self.body()
        }
    }

    fn body(&self) -> FormBody<'_> {
        FormBody {
            status: self.status,
            company_name: &self.company_name,
            site_name: &self.site_name,
            equipment: equipment::encode(&self.equipment),
            client_contact: self.client_contact.as_deref(),
            photographer: self.photographer.as_deref(),
            shoot_period: self.shoot_period.as_deref(),
            start_date: self.start_date.map(|d| d.format("%Y-%m-%d").to_string()),
            end_date: self.end_date.map(|d| d.format("%Y-%m-%d").to_string()),
            drawing_model: self.drawing_model.as_deref(),
            remarks: self.remarks.as_deref(),
            site_address: self.site_address.as_deref(),
            created_by: None,
            updated_by: None,
        }
    }
}

/// Serialized form payload (wire form, equipment encoded).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FormBody<'a> {
    status: ProjectStatus,
    company_name: &'a str,
    site_name: &'a str,
    equipment: String,
    client_contact: Option<&'a str>,
    photographer: Option<&'a str>,
    shoot_period: Option<&'a str>,
    start_date: Option<String>,
    end_date: Option<String>,
    drawing_model: Option<&'a str>,
    remarks: Option<&'a str>,
    site_address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_by: Option<&'a str>,
}

/// Response of `POST /api/projects/import`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportSummary {
    pub message: String,
    pub count: usize,
}

/// Equipment master row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Equipment {
    pub id: DbId,
    pub name: String,
}

/// Status master row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: DbId,
    pub name: String,
    pub sort_order: i16,
}
