//! Repository for the master tables (`equipment`, `statuses`, `users`).

use sqlx::PgPool;

use crate::models::lookup::{Equipment, Status, User};

/// Read-only access to master data.
pub struct LookupRepo;

impl LookupRepo {
    pub async fn list_equipment(pool: &PgPool) -> Result<Vec<Equipment>, sqlx::Error> {
        sqlx::query_as::<_, Equipment>("SELECT id, name FROM equipment ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Statuses in display order.
    pub async fn list_statuses(pool: &PgPool) -> Result<Vec<Status>, sqlx::Error> {
        sqlx::query_as::<_, Status>(
            "SELECT id, name, sort_order FROM statuses ORDER BY sort_order, id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
