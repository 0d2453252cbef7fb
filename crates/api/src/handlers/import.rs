//! Handler for `POST /api/projects/import`.
//!
//! Rows are validated and inserted one at a time. A row that fails either
//! step is logged and skipped; the response only reports how many rows
//! were created.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use survey_core::import::{batch_rows, ImportRecord};
use survey_core::project::IMPORT_AUTHOR;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Message returned when the body has no `projects` array.
pub const INVALID_BATCH_MESSAGE: &str = "プロジェクトデータが無効です";

/// Result of an import batch.
#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub message: String,
    pub count: usize,
}

impl ImportSummary {
    pub fn new(count: usize) -> Self {
        Self {
            message: format!("{count}件のプロジェクトをインポートしました"),
            count,
        }
    }
}

/// POST /api/projects/import
pub async fn import_projects(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> AppResult<Json<ImportSummary>> {
    let rows =
        batch_rows(&body).ok_or_else(|| AppError::BadRequest(INVALID_BATCH_MESSAGE.to_string()))?;

    let mut count = 0;
    for (index, row) in rows.iter().enumerate() {
        let draft = match ImportRecord::from_value(row).and_then(ImportRecord::into_draft) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!(row = index, error = %e, "Skipping invalid import row");
                continue;
            }
        };

        match state.projects.create(&draft, IMPORT_AUTHOR).await {
            Ok(project) => {
                count += 1;
                tracing::debug!(row = index, project_id = project.id, "Imported row");
            }
            Err(e) => {
                tracing::warn!(row = index, error = %e, "Failed to store import row");
            }
        }
    }

    tracing::info!(total = rows.len(), imported = count, "Project import finished");
    Ok(Json(ImportSummary::new(count)))
}
