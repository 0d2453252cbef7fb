//! Master data routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::lookup;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/equipment", get(lookup::list_equipment))
        .route("/statuses", get(lookup::list_statuses))
        .route("/users", get(lookup::list_users))
}
