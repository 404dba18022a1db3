use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the reading file is gone.
    pub status: &'static str,
    pub version: &'static str,
    pub store_healthy: bool,
    pub reporting_mode: &'static str,
    pub threshold_entries: usize,
}

/// GET /health
///
/// Always 200. A missing reading file still lets the dashboard render its
/// `No Data` figures, so it degrades the status instead of failing it.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = state.store.path().is_file();

    Json(HealthResponse {
        status: if store_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
        reporting_mode: state.config.reporting_mode.as_str(),
        threshold_entries: state.thresholds.len(),
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
