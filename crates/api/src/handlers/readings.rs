//! Handlers for listing and submitting readings.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condmon_core::filter::filter_readings;
use condmon_core::reading::Reading;
use condmon_core::submission::NewReading;

use crate::error::{AppError, AppResult};
use crate::handlers::load_readings;
use crate::query::ReadingFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /readings?equipment=&start=&end=
///
/// All stored readings in file order, optionally narrowed to one tag and an
/// inclusive date window.
pub async fn list_readings(
    State(state): State<AppState>,
    Query(params): Query<ReadingFilterParams>,
) -> AppResult<Json<DataResponse<Vec<Reading>>>> {
    let readings = load_readings(&state).await?;
    let (start, end) = params.range().bounds();
    let filtered = filter_readings(&readings, params.equipment.as_deref(), start, end)?;
    Ok(Json(DataResponse { data: filtered }))
}

/// POST /readings
///
/// Validate a form submission and append it to the reading file.
/// Returns 201 with the stored row.
pub async fn submit_reading(
    State(state): State<AppState>,
    Json(input): Json<NewReading>,
) -> AppResult<impl IntoResponse> {
    let reading = input.into_reading()?;

    let store = state.store.clone();
    let reading = tokio::task::spawn_blocking(move || store.append(&reading).map(|()| reading))
        .await
        .map_err(|e| AppError::InternalError(format!("Reading append task failed: {e}")))??;

    tracing::info!(
        area = %reading.area,
        equipment = %reading.equipment,
        date = %reading.date,
        "Reading submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: reading })))
}
