//! Safety and lubrication compliance over the unfiltered reading set.

use serde::Serialize;

use crate::figure::{percentage_of, Figure, Unit};
use crate::reading::{Indicator, OilLevel, Reading};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceSummary {
    /// Percentage of readings with no abnormal sound. `N/A` rows count against.
    pub safety_check: Figure,
    /// Percentage of readings whose oil level is not `Low`.
    pub oil_level_compliance: Figure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceDisplay {
    pub safety_check: String,
    pub oil_level_compliance: String,
}

impl ComplianceSummary {
    pub fn no_data() -> Self {
        Self {
            safety_check: Figure::NoData,
            oil_level_compliance: Figure::NoData,
        }
    }

    pub fn display(&self) -> ComplianceDisplay {
        ComplianceDisplay {
            safety_check: self.safety_check.display(Unit::Percent),
            oil_level_compliance: self.oil_level_compliance.display(Unit::Percent),
        }
    }
}

pub fn compliance_summary(readings: &[Reading]) -> ComplianceSummary {
    if readings.is_empty() {
        return ComplianceSummary::no_data();
    }
    ComplianceSummary {
        safety_check: percentage_of(readings, |r| r.abnormal_sound == Indicator::No).into(),
        oil_level_compliance: percentage_of(readings, |r| r.oil_level != OilLevel::Low).into(),
    }
}
