//! Handlers for the weekly deviation report and its CSV download.
//!
//! Extended reporting mode only.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use condmon_core::deviation::{evaluate_deviations, DeviationReport};
use condmon_core::error::CoreError;
use condmon_core::reading::Reading;
use condmon_core::recommendation::{recommend, Limits};
use condmon_core::thresholds::ThresholdTable;
use condmon_core::types::ReadingDate;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::{load_readings, require_extended};
use crate::query::DateRangeParams;
use crate::response::DataResponse;
use crate::state::AppState;

const REPORT_FILE_NAME: &str = "weekly_report.csv";

/// Deviation report for one window plus per-equipment advice on the
/// flagged rows.
#[derive(Debug, Serialize)]
pub struct WeeklyReport {
    pub start: ReadingDate,
    pub end: ReadingDate,
    #[serde(flatten)]
    pub report: DeviationReport,
    /// Empty unless deviations were found.
    pub insights: Vec<String>,
}

pub(crate) fn weekly_report(
    readings: &[Reading],
    thresholds: &ThresholdTable,
    start: ReadingDate,
    end: ReadingDate,
) -> Result<WeeklyReport, CoreError> {
    let report = evaluate_deviations(readings, thresholds, start, end)?;
    let insights = if report.has_deviations() {
        recommend(&report.rows, Limits::PerEquipment(thresholds))
    } else {
        Vec::new()
    };
    Ok(WeeklyReport {
        start,
        end,
        report,
        insights,
    })
}

/// Resolve the requested window, defaulting to the configured trailing week.
pub(crate) fn report_window(state: &AppState, params: &DateRangeParams) -> (ReadingDate, ReadingDate) {
    let today = chrono::Local::now().date_naive();
    params.trailing(today, state.config.report_window_days)
}

/// GET /deviations?start=&end=
pub async fn get_deviations(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> AppResult<Json<DataResponse<WeeklyReport>>> {
    require_extended(&state, "Weekly deviation report")?;
    let (start, end) = report_window(&state, &params);
    let readings = load_readings(&state).await?;
    let report = weekly_report(&readings, &state.thresholds, start, end)?;

    tracing::debug!(
        %start,
        %end,
        flagged = report.report.flagged_equipment.len(),
        "Evaluated weekly deviations"
    );
    Ok(Json(DataResponse { data: report }))
}

/// GET /deviations/report.csv?start=&end=
///
/// The flagged rows with the reading file header, as an attachment. Header
/// only when nothing was flagged.
pub async fn download_report(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> AppResult<impl IntoResponse> {
    require_extended(&state, "Weekly deviation report")?;
    let (start, end) = report_window(&state, &params);
    let readings = load_readings(&state).await?;
    let report = evaluate_deviations(&readings, &state.thresholds, start, end)?;
    let body = condmon_store::export_csv(&report.rows)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        body,
    ))
}
