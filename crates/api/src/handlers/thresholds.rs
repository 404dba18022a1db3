use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use condmon_core::error::CoreError;
use condmon_core::thresholds::EquipmentThreshold;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /thresholds
///
/// The full per-equipment limit table, keyed by tag in tag order.
pub async fn list_thresholds(
    State(state): State<AppState>,
) -> Json<DataResponse<BTreeMap<String, EquipmentThreshold>>> {
    let table = state
        .thresholds
        .sorted()
        .into_iter()
        .map(|(tag, limits)| (tag.to_string(), limits))
        .collect();
    Json(DataResponse { data: table })
}

/// GET /thresholds/{equipment}
pub async fn get_threshold(
    State(state): State<AppState>,
    Path(equipment): Path<String>,
) -> AppResult<Json<DataResponse<EquipmentThreshold>>> {
    let limits = state
        .thresholds
        .get(&equipment)
        .copied()
        .ok_or(CoreError::NotFound {
            entity: "Threshold",
            id: equipment,
        })?;
    Ok(Json(DataResponse { data: limits }))
}
