//! Weekly deviation evaluation against per-equipment limits.
//!
//! The decision is per equipment, not per row: if any in-window reading of a
//! tag exceeds any of its limits, every in-window reading of that tag is
//! reported. Tags without a threshold entry are never flagged.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::filter::{in_window, validate_date_range};
use crate::reading::Reading;
use crate::thresholds::ThresholdTable;
use crate::types::ReadingDate;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const MSG_NO_DATA: &str = "No data available for analysis.";
pub const MSG_EMPTY_WINDOW: &str = "No significant deviations detected for the selected week.";
pub const MSG_WITHIN_THRESHOLDS: &str =
    "All equipment is operating within defined thresholds for the week.";
pub const MSG_MAJOR_DEVIATIONS: &str = "Major deviations detected for the selected week.";

/// Outcome of a deviation evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationStatus {
    /// The reading store is empty.
    NoData,
    /// There are readings, but none inside the window.
    EmptyWindow,
    /// Readings exist in the window and none exceed their limits.
    WithinThresholds,
    /// At least one tag exceeded a limit in the window.
    MajorDeviations,
}

impl DeviationStatus {
    /// Human-readable status line.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoData => MSG_NO_DATA,
            Self::EmptyWindow => MSG_EMPTY_WINDOW,
            Self::WithinThresholds => MSG_WITHIN_THRESHOLDS,
            Self::MajorDeviations => MSG_MAJOR_DEVIATIONS,
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviationReport {
    pub status: DeviationStatus,
    pub message: &'static str,
    /// Flagged tags, in tag order.
    pub flagged_equipment: Vec<String>,
    /// Every in-window reading of every flagged tag, grouped by tag in tag
    /// order, preserving input order within a tag.
    pub rows: Vec<Reading>,
}

impl DeviationReport {
    fn empty(status: DeviationStatus) -> Self {
        Self {
            status,
            message: status.message(),
            flagged_equipment: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn has_deviations(&self) -> bool {
        self.status == DeviationStatus::MajorDeviations
    }
}

/// Flag equipment whose readings in `[start, end]` exceed their limits.
pub fn evaluate_deviations(
    readings: &[Reading],
    thresholds: &ThresholdTable,
    start: ReadingDate,
    end: ReadingDate,
) -> Result<DeviationReport, CoreError> {
    validate_date_range(start, end)?;

    if readings.is_empty() {
        return Ok(DeviationReport::empty(DeviationStatus::NoData));
    }

    let mut groups: BTreeMap<&str, Vec<&Reading>> = BTreeMap::new();
    for reading in readings.iter().filter(|r| in_window(r, start, end)) {
        groups.entry(reading.equipment.as_str()).or_default().push(reading);
    }

    if groups.is_empty() {
        return Ok(DeviationReport::empty(DeviationStatus::EmptyWindow));
    }

    let mut flagged_equipment = Vec::new();
    let mut rows = Vec::new();
    for (tag, group) in groups {
        let Some(threshold) = thresholds.get(tag) else {
            continue;
        };
        if group.iter().any(|r| threshold.is_exceeded_by(r)) {
            flagged_equipment.push(tag.to_string());
            rows.extend(group.into_iter().cloned());
        }
    }

    if flagged_equipment.is_empty() {
        return Ok(DeviationReport::empty(DeviationStatus::WithinThresholds));
    }

    Ok(DeviationReport {
        status: DeviationStatus::MajorDeviations,
        message: MSG_MAJOR_DEVIATIONS,
        flagged_equipment,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::roster::Area;
    use crate::thresholds::EquipmentThreshold;

    fn day(d: u32) -> ReadingDate {
        ReadingDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    fn running(tag: &str, d: u32, driving: f64, driven: f64, rms: f64) -> Reading {
        let mut r = Reading::not_running(day(d), Area::Reaction, tag);
        r.is_running = true;
        r.driving_end_temp = driving;
        r.driven_end_temp = driven;
        r.rms_velocity = rms;
        r
    }

    fn table() -> ThresholdTable {
        let mut t = ThresholdTable::new();
        t.insert("3-P-101", EquipmentThreshold::new(60.0, 80.0, 4.0));
        t.insert("3-P-201", EquipmentThreshold::new(65.0, 65.0, 4.8));
        t
    }

    #[test]
    fn driving_temp_over_limit_flags_equipment() {
        let readings = vec![running("3-P-101", 2, 65.0, 50.0, 3.0)];
        let report = evaluate_deviations(&readings, &table(), day(1), day(7)).unwrap();
        assert_eq!(report.status, DeviationStatus::MajorDeviations);
        assert_eq!(report.message, MSG_MAJOR_DEVIATIONS);
        assert_eq!(report.flagged_equipment, vec!["3-P-101".to_string()]);
        assert_eq!(report.rows, readings);
    }

    #[test]
    fn flag_pulls_in_every_row_of_the_equipment() {
        let readings = vec![
            running("3-P-101", 2, 40.0, 40.0, 1.0),
            running("3-P-201", 3, 40.0, 40.0, 1.0),
            running("3-P-101", 4, 40.0, 40.0, 4.5),
            running("3-P-101", 20, 90.0, 90.0, 9.0),
        ];
        let report = evaluate_deviations(&readings, &table(), day(1), day(7)).unwrap();
        assert_eq!(report.flagged_equipment, vec!["3-P-101".to_string()]);
        let days: Vec<_> = report.rows.iter().map(|r| r.date).collect();
        assert_eq!(days, vec![day(2), day(4)]);
    }

    #[test]
    fn rows_are_grouped_in_tag_order() {
        let readings = vec![
            running("3-P-201", 1, 70.0, 40.0, 1.0),
            running("3-P-101", 2, 61.0, 40.0, 1.0),
            running("3-P-201", 3, 40.0, 40.0, 1.0),
        ];
        let report = evaluate_deviations(&readings, &table(), day(1), day(7)).unwrap();
        let tags: Vec<_> = report.rows.iter().map(|r| r.equipment.as_str()).collect();
        assert_eq!(tags, vec!["3-P-101", "3-P-201", "3-P-201"]);
    }

    #[test]
    fn unknown_equipment_is_never_flagged() {
        let readings = vec![running("9-X-999", 2, 199.0, 199.0, 99.0)];
        let report = evaluate_deviations(&readings, &table(), day(1), day(7)).unwrap();
        assert_eq!(report.status, DeviationStatus::WithinThresholds);
        assert_eq!(report.message, MSG_WITHIN_THRESHOLDS);
        assert!(report.rows.is_empty());
    }

    #[test]
    fn empty_store_and_empty_window_are_distinguished() {
        let report = evaluate_deviations(&[], &table(), day(1), day(7)).unwrap();
        assert_eq!(report.status, DeviationStatus::NoData);
        assert_eq!(report.message, MSG_NO_DATA);

        let readings = vec![running("3-P-101", 20, 99.0, 99.0, 9.0)];
        let report = evaluate_deviations(&readings, &table(), day(1), day(7)).unwrap();
        assert_eq!(report.status, DeviationStatus::EmptyWindow);
        assert!(!report.has_deviations());
    }

    #[test]
    fn reversed_window_is_rejected() {
        assert_matches!(
            evaluate_deviations(&[], &table(), day(7), day(1)),
            Err(CoreError::Validation(_))
        );
    }
}
