pub mod dashboard;
pub mod deviations;
pub mod health;
pub mod pages;
pub mod readings;
pub mod roster;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pages/{page}                      home | monitoring view with navigation
///
/// /roster                            areas, equipment tags, input limits
/// /thresholds                        per-equipment limit table
/// /thresholds/{equipment}            one limit entry
///
/// /readings                          list (GET), submit (POST)
///
/// /kpis                              KPI figures
/// /compliance                        compliance figures
/// /recommendations                   fixed-limit advice
/// /trends                            KPI chart series
/// /trends/running-by-area            running share per area (extended)
/// /equipment/{tag}/series            equipment chart series
/// /distribution/oil                  oil level value counts
///
/// /deviations                        weekly deviation report (extended)
/// /deviations/report.csv             report download (extended)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pages", pages::router())
        .nest("/roster", roster::router())
        .nest("/thresholds", roster::thresholds_router())
        .nest("/readings", readings::router())
        .merge(dashboard::router())
        .nest("/deviations", deviations::router())
}
