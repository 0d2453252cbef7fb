pub mod health;
pub mod lookup;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                    list, create
/// /projects/import             bulk import (POST)
/// /projects/{id}               get, replace, delete
///
/// /equipment                   equipment master list
/// /statuses                    status master list (display order)
/// /users                       user master list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .merge(lookup::router())
}
