//! Route definitions for the fleet dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes merged at the API root.
///
/// ```text
/// GET  /kpis                        -> get_kpis
/// GET  /compliance                  -> get_compliance
/// GET  /recommendations             -> get_recommendations
/// GET  /trends                      -> get_trends
/// GET  /trends/running-by-area      -> get_running_by_area   (extended)
/// GET  /equipment/{tag}/series      -> get_equipment_series  (?start=&end=)
/// GET  /distribution/oil            -> get_oil_distribution  (?equipment=&start=&end=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kpis", get(dashboard::get_kpis))
        .route("/compliance", get(dashboard::get_compliance))
        .route("/recommendations", get(dashboard::get_recommendations))
        .route("/trends", get(dashboard::get_trends))
        .route("/trends/running-by-area", get(dashboard::get_running_by_area))
        .route("/equipment/{tag}/series", get(dashboard::get_equipment_series))
        .route("/distribution/oil", get(dashboard::get_oil_distribution))
}
