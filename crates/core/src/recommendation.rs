//! Canned maintenance advice derived from reading rows.
//!
//! Two variants share one entry point, selected by [`Limits`]:
//!
//! - [`Limits::Fixed`] applies fleet-wide limits and emits each advisory at
//!   most once for the whole row set.
//! - [`Limits::PerEquipment`] applies each tag's own limits and emits one
//!   advisory per offending row and condition.

use crate::reading::{OilLevel, Reading};
use crate::thresholds::ThresholdTable;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_NO_DATA: &str = "No data available for recommendations.";
pub const MSG_HIGH_DRIVING_TEMP: &str = "Investigate high driving end temperature.";
pub const MSG_HIGH_VIBRATION: &str = "Check equipment with high vibration levels.";
pub const MSG_LOW_OIL: &str = "Refill oil for equipment with low levels.";
pub const MSG_ALL_NORMAL: &str = "All equipment is operating within normal parameters.";
pub const MSG_NO_WEEKLY_ISSUES: &str =
    "No immediate issues detected in the weekly data. All equipment operating within thresholds.";

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Fleet-wide limits used on the home page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLimits {
    /// Driving end temperature in °C.
    pub driving_end_temp_max: f64,
    /// RMS velocity in mm/s.
    pub rms_velocity_max: f64,
}

impl Default for FixedLimits {
    fn default() -> Self {
        Self {
            driving_end_temp_max: 80.0,
            rms_velocity_max: 5.0,
        }
    }
}

/// Which limits the generator compares rows against.
#[derive(Debug, Clone, Copy)]
pub enum Limits<'a> {
    Fixed(FixedLimits),
    PerEquipment(&'a ThresholdTable),
}

/// Advice for `rows`. Never empty.
pub fn recommend(rows: &[Reading], limits: Limits<'_>) -> Vec<String> {
    if rows.is_empty() {
        return vec![MSG_NO_DATA.to_string()];
    }
    match limits {
        Limits::Fixed(fixed) => recommend_fixed(rows, fixed),
        Limits::PerEquipment(table) => recommend_per_equipment(rows, table),
    }
}

fn recommend_fixed(rows: &[Reading], limits: FixedLimits) -> Vec<String> {
    let mut advice = Vec::new();
    if rows.iter().any(|r| r.driving_end_temp > limits.driving_end_temp_max) {
        advice.push(MSG_HIGH_DRIVING_TEMP.to_string());
    }
    if rows.iter().any(|r| r.rms_velocity > limits.rms_velocity_max) {
        advice.push(MSG_HIGH_VIBRATION.to_string());
    }
    if rows.iter().any(|r| r.oil_level == OilLevel::Low) {
        advice.push(MSG_LOW_OIL.to_string());
    }
    if advice.is_empty() {
        advice.push(MSG_ALL_NORMAL.to_string());
    }
    advice
}

fn recommend_per_equipment(rows: &[Reading], table: &ThresholdTable) -> Vec<String> {
    let mut advice = Vec::new();
    for row in rows {
        let tag = &row.equipment;
        let limit = table.get(tag);
        let driving_max = limit.map_or(f64::INFINITY, |t| t.driving_end_temp_max);
        let rms_max = limit.map_or(f64::INFINITY, |t| t.rms_velocity_max);

        if row.driving_end_temp > driving_max {
            advice.push(format!(
                "{tag}: Driving End Temp exceeds threshold. Maintenance recommended."
            ));
        }
        if row.oil_level == OilLevel::Low {
            advice.push(format!("{tag}: Oil level is low. Consider refilling."));
        }
        if row.rms_velocity > rms_max {
            advice.push(format!(
                "{tag}: High vibration detected. Inspect for potential issues."
            ));
        }
    }
    if advice.is_empty() {
        advice.push(MSG_NO_WEEKLY_ISSUES.to_string());
    }
    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Area;
    use crate::thresholds::EquipmentThreshold;
    use crate::types::ReadingDate;

    fn running(tag: &str, driving: f64, rms: f64, oil: OilLevel) -> Reading {
        let date = ReadingDate::from_ymd_opt(2024, 4, 9).unwrap();
        let mut r = Reading::not_running(date, Area::Finishing, tag);
        r.is_running = true;
        r.driving_end_temp = driving;
        r.driven_end_temp = driving - 5.0;
        r.rms_velocity = rms;
        r.oil_level = oil;
        r
    }

    #[test]
    fn low_oil_fires_only_the_oil_rule() {
        let rows = vec![running("3-P-501-A", 50.0, 2.0, OilLevel::Low)];
        let advice = recommend(&rows, Limits::Fixed(FixedLimits::default()));
        assert_eq!(advice, vec![MSG_LOW_OIL.to_string()]);
    }

    #[test]
    fn fixed_rules_fire_once_each_in_order() {
        let rows = vec![
            running("3-P-501-A", 85.0, 6.0, OilLevel::Low),
            running("3-P-501-B", 90.0, 7.0, OilLevel::Low),
        ];
        let advice = recommend(&rows, Limits::Fixed(FixedLimits::default()));
        assert_eq!(advice, vec![MSG_HIGH_DRIVING_TEMP, MSG_HIGH_VIBRATION, MSG_LOW_OIL]);
    }

    #[test]
    fn fixed_limits_are_strict() {
        let rows = vec![running("3-P-501-A", 80.0, 5.0, OilLevel::Normal)];
        let advice = recommend(&rows, Limits::Fixed(FixedLimits::default()));
        assert_eq!(advice, vec![MSG_ALL_NORMAL]);
    }

    #[test]
    fn empty_rows_report_no_data() {
        assert_eq!(recommend(&[], Limits::Fixed(FixedLimits::default())), vec![MSG_NO_DATA]);
        let table = ThresholdTable::new();
        assert_eq!(recommend(&[], Limits::PerEquipment(&table)), vec![MSG_NO_DATA]);
    }

    #[test]
    fn per_equipment_uses_each_tags_limits() {
        let mut table = ThresholdTable::new();
        table.insert("3-P-501-A", EquipmentThreshold::new(58.0, 58.0, 4.2));
        table.insert("3-P-601-A", EquipmentThreshold::new(65.0, 65.0, 5.2));
        let rows = vec![
            running("3-P-501-A", 60.0, 4.5, OilLevel::Normal),
            running("3-P-601-A", 60.0, 4.5, OilLevel::Low),
        ];
        let advice = recommend(&rows, Limits::PerEquipment(&table));
        assert_eq!(
            advice,
            vec![
                "3-P-501-A: Driving End Temp exceeds threshold. Maintenance recommended.",
                "3-P-501-A: High vibration detected. Inspect for potential issues.",
                "3-P-601-A: Oil level is low. Consider refilling.",
            ]
        );
    }

    #[test]
    fn per_equipment_repeats_advice_per_row() {
        let mut table = ThresholdTable::new();
        table.insert("3-M-501", EquipmentThreshold::new(62.0, 62.0, 4.7));
        let rows = vec![
            running("3-M-501", 70.0, 1.0, OilLevel::Normal),
            running("3-M-501", 71.0, 1.0, OilLevel::Normal),
        ];
        let advice = recommend(&rows, Limits::PerEquipment(&table));
        assert_eq!(advice.len(), 2);
    }

    #[test]
    fn per_equipment_without_entry_only_checks_oil() {
        let table = ThresholdTable::new();
        let rows = vec![running("9-X-1", 199.0, 99.0, OilLevel::Normal)];
        assert_eq!(recommend(&rows, Limits::PerEquipment(&table)), vec![MSG_NO_WEEKLY_ISSUES]);

        let rows = vec![running("9-X-1", 199.0, 99.0, OilLevel::Low)];
        assert_eq!(
            recommend(&rows, Limits::PerEquipment(&table)),
            vec!["9-X-1: Oil level is low. Consider refilling."]
        );
    }
}
