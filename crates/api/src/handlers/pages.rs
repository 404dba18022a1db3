//! Handler for the two dashboard pages.
//!
//! Navigation state travels in the path: each view echoes the current page
//! and the targets of its "Next" and "Back" controls.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Timelike;
use condmon_core::compliance::{compliance_summary, ComplianceDisplay};
use condmon_core::kpi::{compute_kpis, KpiDisplay};
use condmon_core::navigation::{greeting, Page};
use condmon_core::recommendation::{recommend, FixedLimits, Limits};
use condmon_core::trends::{kpi_trends, running_percentage_by_area, AreaShare, KpiTrends};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::deviations::{report_window, weekly_report, WeeklyReport};
use crate::handlers::load_readings;
use crate::handlers::roster::{roster_view, RosterView};
use crate::query::DateRangeParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct Navigation {
    pub current: Page,
    pub next: Page,
    pub back: Page,
}

impl From<Page> for Navigation {
    fn from(page: Page) -> Self {
        Self {
            current: page,
            next: page.next(),
            back: page.back(),
        }
    }
}

/// Fleet overview.
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub greeting: &'static str,
    pub kpis: KpiDisplay,
    pub recommendations: Vec<String>,
    pub compliance: ComplianceDisplay,
    pub trends: KpiTrends,
    /// Present in extended reporting mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_by_area: Option<Vec<AreaShare>>,
}

/// Data entry form plus the default weekly report.
#[derive(Debug, Serialize)]
pub struct MonitoringView {
    pub roster: RosterView,
    /// Present in extended reporting mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_report: Option<WeeklyReport>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContent {
    Home(HomeView),
    Monitoring(MonitoringView),
}

#[derive(Debug, Serialize)]
pub struct PageView {
    pub navigation: Navigation,
    pub content: PageContent,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// GET /pages/{page}
///
/// `page` is `home` or `monitoring`; anything else is a 404.
pub async fn get_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> AppResult<Json<DataResponse<PageView>>> {
    let page = Page::from_str_value(&page)?;
    let content = match page {
        Page::Home => PageContent::Home(home_view(&state).await?),
        Page::Monitoring => PageContent::Monitoring(monitoring_view(&state).await?),
    };
    Ok(Json(DataResponse {
        data: PageView {
            navigation: page.into(),
            content,
        },
    }))
}

async fn home_view(state: &AppState) -> AppResult<HomeView> {
    let readings = load_readings(state).await?;
    let extended = state.config.reporting_mode.is_extended();

    Ok(HomeView {
        greeting: greeting(chrono::Local::now().hour()),
        kpis: compute_kpis(&readings).display(),
        recommendations: recommend(&readings, Limits::Fixed(FixedLimits::default())),
        compliance: compliance_summary(&readings).display(),
        trends: kpi_trends(&readings),
        running_by_area: extended.then(|| running_percentage_by_area(&readings)),
    })
}

async fn monitoring_view(state: &AppState) -> AppResult<MonitoringView> {
    let weekly_report = if state.config.reporting_mode.is_extended() {
        let readings = load_readings(state).await?;
        let (start, end) = report_window(state, &DateRangeParams::default());
        Some(weekly_report(&readings, &state.thresholds, start, end)?)
    } else {
        None
    };

    Ok(MonitoringView {
        roster: roster_view(),
        weekly_report,
    })
}
