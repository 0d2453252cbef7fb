use async_trait::async_trait;
use survey_core::project::ProjectDraft;
use survey_core::types::DbId;

use super::{LookupStore, ProjectStore, StoreError};
use crate::models::lookup::{Equipment, Status, User};
use crate::models::project::Project;
use crate::repositories::{LookupRepo, ProjectRepo};
use crate::DbPool;

/// Postgres-backed store delegating to the repository structs.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create(&self, draft: &ProjectDraft, created_by: &str) -> Result<Project, StoreError> {
        Ok(ProjectRepo::create(&self.pool, draft, created_by).await?)
    }

    async fn update(
        &self,
        id: DbId,
        draft: &ProjectDraft,
        updated_by: &str,
    ) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::update(&self.pool, id, draft, updated_by).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

#[async_trait]
impl LookupStore for PgStore {
    async fn list_equipment(&self) -> Result<Vec<Equipment>, StoreError> {
        Ok(LookupRepo::list_equipment(&self.pool).await?)
    }

    async fn list_statuses(&self) -> Result<Vec<Status>, StoreError> {
        Ok(LookupRepo::list_statuses(&self.pool).await?)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(LookupRepo::list_users(&self.pool).await?)
    }
}
