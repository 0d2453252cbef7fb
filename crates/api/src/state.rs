use std::sync::Arc;

use survey_db::store::{LookupStore, ProjectStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project persistence (Postgres or in-memory).
    pub projects: Arc<dyn ProjectStore>,
    /// Master data for form choices.
    pub lookups: Arc<dyn LookupStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state from a single backend that serves both projects and lookups.
    pub fn new<S>(store: Arc<S>, config: ServerConfig) -> Self
    where
        S: ProjectStore + LookupStore + 'static,
    {
        Self {
            projects: store.clone(),
            lookups: store,
            config: Arc::new(config),
        }
    }
}
