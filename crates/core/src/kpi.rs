//! Fleet-wide key performance indicators.
//!
//! Every figure is computed over the full reading set. Stopped equipment
//! contributes zero temperatures to the average, which pulls it down; the
//! dashboard has always reported it this way.

use serde::Serialize;

use crate::figure::{mean, percentage_of, Figure, Unit};
use crate::reading::Reading;

/// Headline KPIs shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    /// Share of readings marked running, in percent.
    pub compliance_rate: Figure,
    /// Mean over both bearing temperature columns of every reading, in °C.
    pub avg_temp: Figure,
    /// Running readings over total readings, in percent.
    ///
    /// Same quantity as `compliance_rate`; both are reported.
    pub running_percentage: Figure,
}

/// KPI figures formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiDisplay {
    pub compliance_rate: String,
    pub avg_temp: String,
    pub running_percentage: String,
}

impl Kpis {
    /// All three figures set to the `No Data` sentinel.
    pub fn no_data() -> Self {
        Self {
            compliance_rate: Figure::NoData,
            avg_temp: Figure::NoData,
            running_percentage: Figure::NoData,
        }
    }

    pub fn display(&self) -> KpiDisplay {
        KpiDisplay {
            compliance_rate: self.compliance_rate.display(Unit::Percent),
            avg_temp: self.avg_temp.display(Unit::Celsius),
            running_percentage: self.running_percentage.display(Unit::Percent),
        }
    }
}

/// Compute the headline KPIs for `readings`.
pub fn compute_kpis(readings: &[Reading]) -> Kpis {
    if readings.is_empty() {
        return Kpis::no_data();
    }

    let compliance_rate = percentage_of(readings, |r| r.is_running);

    let avg_temp = mean(
        readings
            .iter()
            .map(|r| r.driving_end_temp)
            .chain(readings.iter().map(|r| r.driven_end_temp)),
    );

    let running = readings.iter().filter(|r| r.is_running).count();
    let running_percentage = running as f64 / readings.len() as f64 * 100.0;

    Kpis {
        compliance_rate: compliance_rate.into(),
        avg_temp: avg_temp.into(),
        running_percentage: Figure::Value(running_percentage),
    }
}
