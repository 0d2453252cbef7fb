//! Injectable storage abstraction.
//!
//! The HTTP layer depends only on [`ProjectStore`] and [`LookupStore`].
//! [`PgStore`] is the production backend; [`MemoryStore`] satisfies the
//! same contract without a database and backs local runs and tests.

mod memory;
mod postgres;

use async_trait::async_trait;
use survey_core::project::ProjectDraft;
use survey_core::types::DbId;

use crate::models::lookup::{Equipment, Status, User};
use crate::models::project::Project;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors surfaced by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence contract for the `Project` resource.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects, most recently updated first (ties: higher id first).
    async fn list(&self) -> Result<Vec<Project>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError>;

    /// Insert a row. `created_by` is also recorded as `updated_by`.
    async fn create(&self, draft: &ProjectDraft, created_by: &str) -> Result<Project, StoreError>;

    /// Replace a row. Returns `None` if `id` does not exist.
    async fn update(
        &self,
        id: DbId,
        draft: &ProjectDraft,
        updated_by: &str,
    ) -> Result<Option<Project>, StoreError>;

    /// Remove a row. Returns `false` if `id` does not exist.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

/// Read access to master data used for form choices.
#[async_trait]
pub trait LookupStore: Send + Sync {
    async fn list_equipment(&self) -> Result<Vec<Equipment>, StoreError>;

    /// Statuses ordered by `sort_order`.
    async fn list_statuses(&self) -> Result<Vec<Status>, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
}
