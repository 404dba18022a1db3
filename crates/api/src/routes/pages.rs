use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page view routes mounted at `/pages`.
///
/// ```text
/// GET  /{page}   -> get_page   (home | monitoring)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{page}", get(pages::get_page))
}
