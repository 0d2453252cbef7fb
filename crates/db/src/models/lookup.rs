//! Master data rows used to populate form choices.
//!
//! Nothing references these tables by foreign key; they are maintained
//! independently of `projects`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use survey_core::types::DbId;

/// A row from the `equipment` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Equipment {
    pub id: DbId,
    pub name: String,
}

/// A row from the `statuses` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: DbId,
    pub name: String,
    pub sort_order: i16,
}

/// A row from the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
}
