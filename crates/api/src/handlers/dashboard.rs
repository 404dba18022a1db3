//! Handlers for the fleet dashboard: KPIs, compliance, recommendations and
//! chart series.
//!
//! Every request re-reads the reading file and recomputes from scratch.

use axum::extract::{Path, Query, State};
use axum::Json;
use condmon_core::compliance::{compliance_summary, ComplianceDisplay, ComplianceSummary};
use condmon_core::error::CoreError;
use condmon_core::filter::filter_readings;
use condmon_core::kpi::{compute_kpis, KpiDisplay, Kpis};
use condmon_core::recommendation::{recommend, FixedLimits, Limits};
use condmon_core::roster;
use condmon_core::trends::{
    equipment_series, kpi_trends, oil_distribution, running_percentage_by_area, AreaShare,
    EquipmentSeries, KpiTrends, OilDistribution,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::{load_readings, require_extended};
use crate::query::{DateRangeParams, ReadingFilterParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Raw figures alongside their display strings.
#[derive(Debug, Serialize)]
pub struct KpiSummary {
    pub values: Kpis,
    pub display: KpiDisplay,
}

#[derive(Debug, Serialize)]
pub struct ComplianceView {
    pub values: ComplianceSummary,
    pub display: ComplianceDisplay,
}

// ---------------------------------------------------------------------------
// Summary figures
// ---------------------------------------------------------------------------

/// GET /kpis
pub async fn get_kpis(State(state): State<AppState>) -> AppResult<Json<DataResponse<KpiSummary>>> {
    let readings = load_readings(&state).await?;
    let values = compute_kpis(&readings);
    Ok(Json(DataResponse {
        data: KpiSummary {
            display: values.display(),
            values,
        },
    }))
}

/// GET /compliance
pub async fn get_compliance(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ComplianceView>>> {
    let readings = load_readings(&state).await?;
    let values = compliance_summary(&readings);
    Ok(Json(DataResponse {
        data: ComplianceView {
            display: values.display(),
            values,
        },
    }))
}

/// GET /recommendations
///
/// Fleet-wide advice against the fixed limits, over every stored reading.
pub async fn get_recommendations(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let readings = load_readings(&state).await?;
    let advice = recommend(&readings, Limits::Fixed(FixedLimits::default()));
    Ok(Json(DataResponse { data: advice }))
}

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

/// GET /trends
pub async fn get_trends(State(state): State<AppState>) -> AppResult<Json<DataResponse<KpiTrends>>> {
    let readings = load_readings(&state).await?;
    Ok(Json(DataResponse {
        data: kpi_trends(&readings),
    }))
}

/// GET /trends/running-by-area
///
/// Extended reporting mode only.
pub async fn get_running_by_area(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<AreaShare>>>> {
    require_extended(&state, "Running-by-area breakdown")?;
    let readings = load_readings(&state).await?;
    Ok(Json(DataResponse {
        data: running_percentage_by_area(&readings),
    }))
}

/// GET /equipment/{tag}/series?start=&end=
///
/// Per-reading chart points for one roster tag, in date order.
pub async fn get_equipment_series(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    Query(params): Query<DateRangeParams>,
) -> AppResult<Json<DataResponse<EquipmentSeries>>> {
    if roster::area_of(&tag).is_none() {
        return Err(CoreError::NotFound {
            entity: "Equipment",
            id: tag,
        }
        .into());
    }
    let readings = load_readings(&state).await?;
    let (start, end) = params.bounds();
    let rows = filter_readings(&readings, Some(&tag), start, end)?;
    Ok(Json(DataResponse {
        data: equipment_series(&rows),
    }))
}

/// GET /distribution/oil?equipment=&start=&end=
pub async fn get_oil_distribution(
    State(state): State<AppState>,
    Query(params): Query<ReadingFilterParams>,
) -> AppResult<Json<DataResponse<OilDistribution>>> {
    let readings = load_readings(&state).await?;
    let (start, end) = params.range().bounds();
    let rows = filter_readings(&readings, params.equipment.as_deref(), start, end)?;
    Ok(Json(DataResponse {
        data: oil_distribution(&rows),
    }))
}
