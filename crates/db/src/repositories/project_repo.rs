//! Repository for the `projects` table.

use sqlx::PgPool;
use survey_core::project::ProjectDraft;
use survey_core::types::DbId;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, status, company_name, site_name, equipment, client_contact, \
     photographer, shoot_period, start_date, end_date, drawing_model, remarks, site_address, \
     created_at, updated_at, created_by, updated_by";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `updated_by` starts out equal to `created_by`.
    pub async fn create(
        pool: &PgPool,
        draft: &ProjectDraft,
        created_by: &str,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (status, company_name, site_name, equipment, client_contact,
                photographer, shoot_period, start_date, end_date, drawing_model, remarks,
                site_address, created_by, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(draft.status.as_str())
            .bind(&draft.company_name)
            .bind(&draft.site_name)
            .bind(&draft.equipment)
            .bind(&draft.client_contact)
            .bind(&draft.photographer)
            .bind(&draft.shoot_period)
            .bind(draft.start_date)
            .bind(draft.end_date)
            .bind(&draft.drawing_model)
            .bind(&draft.remarks)
            .bind(&draft.site_address)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently updated first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY updated_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Replace every writable column of a project and bump `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &ProjectDraft,
        updated_by: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                status = $2,
                company_name = $3,
                site_name = $4,
                equipment = $5,
                client_contact = $6,
                photographer = $7,
                shoot_period = $8,
                start_date = $9,
                end_date = $10,
                drawing_model = $11,
                remarks = $12,
                site_address = $13,
                updated_by = $14,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(draft.status.as_str())
            .bind(&draft.company_name)
            .bind(&draft.site_name)
            .bind(&draft.equipment)
            .bind(&draft.client_contact)
            .bind(&draft.photographer)
            .bind(&draft.shoot_period)
            .bind(draft.start_date)
            .bind(draft.end_date)
            .bind(&draft.drawing_model)
            .bind(&draft.remarks)
            .bind(&draft.site_address)
            .bind(updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if !deleted {
            tracing::debug!(project_id = id, "Delete matched no project row");
        }
        Ok(deleted)
    }
}
