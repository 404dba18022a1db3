//! Handlers for the plant roster used by the data entry form.

use axum::Json;
use condmon_core::roster::{self, Area};
use condmon_core::submission::{
    DISPLACEMENT_MAX, PEAK_ACCELERATION_MAX, RMS_VELOCITY_MAX, TEMP_MAX_CELSIUS,
};
use serde::Serialize;

use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AreaRoster {
    pub area: Area,
    pub equipment: &'static [&'static str],
}

/// Upper bounds accepted by the submission form. Lower bounds are zero.
#[derive(Debug, Serialize)]
pub struct InputLimits {
    pub temp_max_celsius: f64,
    pub rms_velocity_max: f64,
    pub peak_acceleration_max: f64,
    pub displacement_max: f64,
}

#[derive(Debug, Serialize)]
pub struct RosterView {
    pub areas: Vec<AreaRoster>,
    /// Every tag once, in roster order.
    pub equipment: Vec<&'static str>,
    pub input_limits: InputLimits,
}

pub(crate) fn roster_view() -> RosterView {
    RosterView {
        areas: Area::ALL
            .iter()
            .map(|area| AreaRoster {
                area: *area,
                equipment: area.equipment(),
            })
            .collect(),
        equipment: roster::all_equipment(),
        input_limits: InputLimits {
            temp_max_celsius: TEMP_MAX_CELSIUS,
            rms_velocity_max: RMS_VELOCITY_MAX,
            peak_acceleration_max: PEAK_ACCELERATION_MAX,
            displacement_max: DISPLACEMENT_MAX,
        },
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /roster
pub async fn get_roster() -> Json<DataResponse<RosterView>> {
    Json(DataResponse {
        data: roster_view(),
    })
}
