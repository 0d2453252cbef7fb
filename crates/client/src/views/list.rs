//! Project list tab: table rows, the shared create/edit form and deletion.

use survey_core::types::DbId;

use super::ProjectsQuery;
use crate::error::ClientError;
use crate::model::{ImportSummary, Project, ProjectForm};

/// Prompt shown before a project is deleted.
pub const DELETE_CONFIRMATION: &str = "このプロジェクトを削除しますか？";

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: DbId,
    pub status: &'static str,
    pub status_color: &'static str,
    pub company_name: String,
    pub site_name: String,
    pub equipment: String,
    pub photographer: String,
    pub shoot_period: String,
}

impl From<&Project> for ListRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            status: project.status.as_str(),
            status_color: project.status.color(),
            company_name: project.company_name.clone(),
            site_name: project.site_name.clone(),
            equipment: project.equipment.join(", "),
            photographer: project.photographer.clone().unwrap_or_default(),
            shoot_period: project.shoot_period.clone().unwrap_or_default(),
        }
    }
}

/// State of the form overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Creating,
    Editing(Project),
}

pub struct ListView {
    query: ProjectsQuery,
    author: String,
    form: FormState,
}

impl ListView {
    pub fn new(query: ProjectsQuery, author: impl Into<String>) -> Self {
        Self {
            query,
            author: author.into(),
            form: FormState::Closed,
        }
    }

    pub async fn rows(&self) -> Result<Vec<ListRow>, ClientError> {
        let projects = self.query.fetch_all().await?;
        Ok(projects.iter().map(ListRow::from).collect())
    }

    pub fn form_state(&self) -> &FormState {
        &self.form
    }

    pub fn open_create(&mut self) {
        self.form = FormState::Creating;
    }

    pub fn open_edit(&mut self, project: Project) {
        self.form = FormState::Editing(project);
    }

    pub fn cancel(&mut self) {
        self.form = FormState::Closed;
    }

    /// Initial field values for the open form.
    pub fn form_defaults(&self) -> ProjectForm {
        match &self.form {
            FormState::Editing(project) => ProjectForm::from_project(project, self.author.clone()),
            FormState::Creating | FormState::Closed => ProjectForm {
                author: self.author.clone(),
                ..Default::default()
            },
        }
    }

    /// Submit the form: updates the project being edited, otherwise creates
    /// a new one. The form stays open when the request fails.
    pub async fn save(&mut self, form: &ProjectForm) -> Result<Project, ClientError> {
        let saved = match &self.form {
            FormState::Editing(project) => self.query.api().update(project.id, form).await?,
            FormState::Creating | FormState::Closed => self.query.api().create(form).await?,
        };
        tracing::info!(id = saved.id, "Project saved");
        self.query.invalidate();
        self.form = FormState::Closed;
        Ok(saved)
    }

    /// Delete after `confirm` accepts [`DELETE_CONFIRMATION`].
    ///
    /// Returns `false` when the user declined.
    pub async fn delete<F>(&mut self, id: DbId, confirm: F) -> Result<bool, ClientError>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_CONFIRMATION) {
            return Ok(false);
        }
        self.query.api().delete(id).await?;
        tracing::info!(id, "Project deleted");
        self.query.invalidate();
        Ok(true)
    }

    /// Upload rows that were already parsed from a spreadsheet.
    pub async fn import(&mut self, rows: &[serde_json::Value]) -> Result<ImportSummary, ClientError> {
        let summary = self.query.api().import(rows).await?;
        tracing::info!(count = summary.count, "Projects imported");
        self.query.invalidate();
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use survey_core::status::ProjectStatus;

    use super::*;

    fn project() -> Project {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Project {
            id: 9,
            status: ProjectStatus::Completed,
            company_name: "タクマ".into(),
            site_name: "新江東".into(),
            equipment: vec!["FARO".into(), "Pro3".into()],
            client_contact: None,
            photographer: None,
            shoot_period: Some("1/20-1/22".into()),
            start_date: None,
            end_date: None,
            drawing_model: None,
            remarks: None,
            site_address: None,
            created_at: at,
            updated_at: at,
            created_by: "管理者".into(),
            updated_by: "管理者".into(),
        }
    }

    #[test]
    fn row_joins_equipment_and_blanks_missing_text() {
        let row = ListRow::from(&project());
        assert_eq!(row.status, "完了");
        assert_eq!(row.status_color, "#10b981");
        assert_eq!(row.equipment, "FARO, Pro3");
        assert_eq!(row.photographer, "");
        assert_eq!(row.shoot_period, "1/20-1/22");
    }

    #[test]
    fn form_defaults_follow_selection() {
        let query = ProjectsQuery::new(
            std::sync::Arc::new(crate::ProjectsApi::new("http://localhost:5000")),
            std::sync::Arc::default(),
        );
        let mut view = ListView::new(query, "山根");

        view.open_create();
        let blank = view.form_defaults();
        assert_eq!(blank.status, ProjectStatus::Unquoted);
        assert_eq!(blank.author, "山根");
        assert!(blank.company_name.is_empty());

        view.open_edit(project());
        let filled = view.form_defaults();
        assert_eq!(filled.company_name, "タクマ");
        assert_eq!(filled.equipment, vec!["FARO", "Pro3"]);

        view.cancel();
        assert_eq!(view.form_state(), &FormState::Closed);
    }
}
