//! Date-window and equipment filters over the reading set.

use crate::error::CoreError;
use crate::reading::Reading;
use crate::types::ReadingDate;

/// Reject a window whose start is after its end.
pub fn validate_date_range(start: ReadingDate, end: ReadingDate) -> Result<(), CoreError> {
    if start > end {
        return Err(CoreError::Validation(
            "Start date cannot be later than end date".into(),
        ));
    }
    Ok(())
}

/// Whether `reading` falls inside `[start, end]`, both ends inclusive.
pub fn in_window(reading: &Reading, start: ReadingDate, end: ReadingDate) -> bool {
    reading.date >= start && reading.date <= end
}

/// Readings inside `[start, end]`, optionally restricted to one tag.
///
/// Order of the input is preserved.
pub fn filter_readings(
    readings: &[Reading],
    equipment: Option<&str>,
    start: ReadingDate,
    end: ReadingDate,
) -> Result<Vec<Reading>, CoreError> {
    validate_date_range(start, end)?;
    Ok(readings
        .iter()
        .filter(|r| equipment.map_or(true, |tag| r.equipment == tag))
        .filter(|r| in_window(r, start, end))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Area;

    fn day(d: u32) -> ReadingDate {
        ReadingDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn reading(tag: &str, d: u32) -> Reading {
        Reading::not_running(day(d), Area::Reaction, tag)
    }

    #[test]
    fn window_is_inclusive_at_both_ends() {
        let readings = vec![
            reading("3-P-101", 1),
            reading("3-P-101", 2),
            reading("3-P-101", 8),
            reading("3-P-101", 9),
        ];
        let filtered = filter_readings(&readings, None, day(2), day(8)).unwrap();
        let days: Vec<_> = filtered.iter().map(|r| r.date).collect();
        assert_eq!(days, vec![day(2), day(8)]);
    }

    #[test]
    fn equipment_filter_keeps_matching_tag_only() {
        let readings = vec![
            reading("3-P-101", 3),
            reading("3-P-201", 3),
            reading("3-P-101", 4),
        ];
        let filtered = filter_readings(&readings, Some("3-P-101"), day(1), day(31)).unwrap();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.equipment == "3-P-101"));
    }

    #[test]
    fn reversed_window_is_rejected() {
        assert!(filter_readings(&[], None, day(9), day(1)).is_err());
        assert!(validate_date_range(day(1), day(1)).is_ok());
    }
}
