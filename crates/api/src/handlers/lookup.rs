//! Handlers for master data lists.

use axum::extract::State;
use axum::Json;
use survey_db::models::lookup::{Equipment, Status, User};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/equipment
pub async fn list_equipment(State(state): State<AppState>) -> AppResult<Json<Vec<Equipment>>> {
    Ok(Json(state.lookups.list_equipment().await?))
}

/// GET /api/statuses
pub async fn list_statuses(State(state): State<AppState>) -> AppResult<Json<Vec<Status>>> {
    Ok(Json(state.lookups.list_statuses().await?))
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.lookups.list_users().await?))
}
