use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use survey_core::types::Timestamp;

use crate::state::AppState;

/// Service banner returned at `/`.
#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `OK`, or `DEGRADED` when the store is unreachable.
    pub status: &'static str,
    pub timestamp: Timestamp,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET / -- service banner.
async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "測量工程表管理システム API",
    })
}

/// GET /health -- liveness plus store reachability.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match state.projects.health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "OK" } else { "DEGRADED" },
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount banner and health routes (intended for root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health_check))
}
