//! Route definitions for the weekly deviation report.
//!
//! Both endpoints answer 404 in basic reporting mode.

use axum::routing::get;
use axum::Router;

use crate::handlers::deviations;
use crate::state::AppState;

/// Deviation routes mounted at `/deviations`.
///
/// ```text
/// GET  /             -> get_deviations    (?start=&end=)
/// GET  /report.csv   -> download_report   (?start=&end=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(deviations::get_deviations))
        .route("/report.csv", get(deviations::download_report))
}
