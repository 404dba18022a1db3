//! Route definitions for plant reference data.

use axum::routing::get;
use axum::Router;

use crate::handlers::{roster, thresholds};
use crate::state::AppState;

/// Roster routes mounted at `/roster`.
///
/// ```text
/// GET  /   -> get_roster
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(roster::get_roster))
}

/// Threshold routes mounted at `/thresholds`.
///
/// ```text
/// GET  /              -> list_thresholds
/// GET  /{equipment}   -> get_threshold
/// ```
pub fn thresholds_router() -> Router<AppState> {
    Router::new()
        .route("/", get(thresholds::list_thresholds))
        .route("/{equipment}", get(thresholds::get_threshold))
}
