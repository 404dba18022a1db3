pub mod dashboard;
pub mod deviations;
pub mod pages;
pub mod readings;
pub mod roster;
pub mod thresholds;

use condmon_core::reading::Reading;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Load every stored reading on the blocking pool.
pub(crate) async fn load_readings(state: &AppState) -> AppResult<Vec<Reading>> {
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || store.load())
        .await
        .map_err(|e| AppError::InternalError(format!("Reading load task failed: {e}")))?
        .map_err(AppError::from)
}

/// Reject the request unless the server runs in extended reporting mode.
pub(crate) fn require_extended(state: &AppState, feature: &'static str) -> AppResult<()> {
    if state.config.reporting_mode.is_extended() {
        Ok(())
    } else {
        Err(AppError::FeatureDisabled(feature))
    }
}
