//! Chart series built from the reading set.
//!
//! Date-keyed aggregates are ordered by date. Per-row series keep one point
//! per reading, ordered by date with ties in input order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::figure::mean;
use crate::reading::{OilLevel, Reading};
use crate::roster::Area;
use crate::types::ReadingDate;

// ---------------------------------------------------------------------------
// Point types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatePoint {
    pub date: ReadingDate,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaDatePoint {
    pub date: ReadingDate,
    pub area: Area,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaShare {
    pub area: Area,
    pub running_percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperaturePoint {
    pub date: ReadingDate,
    pub driving_end_temp: f64,
    pub driven_end_temp: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VibrationPoint {
    pub date: ReadingDate,
    pub rms_velocity: f64,
    pub peak_acceleration: f64,
    pub displacement: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelCount {
    pub level: OilLevel,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Fleet KPI trends
// ---------------------------------------------------------------------------

/// Series behind the home page KPI charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiTrends {
    /// Percentage of readings marked running, per date.
    pub compliance_rate: Vec<DatePoint>,
    /// Mean of the per-row bearing temperature average, per date.
    pub avg_temp: Vec<DatePoint>,
    /// Number of running readings, per date.
    pub running_count: Vec<DatePoint>,
    /// Number of running readings, per date and area.
    pub running_count_by_area: Vec<AreaDatePoint>,
}

pub fn kpi_trends(readings: &[Reading]) -> KpiTrends {
    let by_date = group_by_date(readings);

    let compliance_rate = by_date
        .iter()
        .map(|(date, rows)| DatePoint {
            date: *date,
            value: running_count(rows) as f64 / rows.len() as f64 * 100.0,
        })
        .collect();

    let avg_temp = by_date
        .iter()
        .filter_map(|(date, rows)| {
            mean(rows.iter().map(|r| r.mean_bearing_temp())).map(|value| DatePoint {
                date: *date,
                value,
            })
        })
        .collect();

    let running_count = by_date
        .iter()
        .map(|(date, rows)| DatePoint {
            date: *date,
            value: self::running_count(rows) as f64,
        })
        .collect();

    let mut by_date_area: BTreeMap<(ReadingDate, Area), usize> = BTreeMap::new();
    for r in readings {
        *by_date_area.entry((r.date, r.area)).or_default() += usize::from(r.is_running);
    }
    let running_count_by_area = by_date_area
        .into_iter()
        .map(|((date, area), count)| AreaDatePoint {
            date,
            area,
            value: count as f64,
        })
        .collect();

    KpiTrends {
        compliance_rate,
        avg_temp,
        running_count,
        running_count_by_area,
    }
}

/// Percentage of readings marked running, per area, in area order.
///
/// Areas without readings are omitted.
pub fn running_percentage_by_area(readings: &[Reading]) -> Vec<AreaShare> {
    let mut by_area: BTreeMap<Area, (usize, usize)> = BTreeMap::new();
    for r in readings {
        let entry = by_area.entry(r.area).or_default();
        entry.0 += usize::from(r.is_running);
        entry.1 += 1;
    }
    by_area
        .into_iter()
        .map(|(area, (running, total))| AreaShare {
            area,
            running_percentage: running as f64 / total as f64 * 100.0,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Equipment series
// ---------------------------------------------------------------------------

/// Per-row series behind the equipment report charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentSeries {
    pub temperature: Vec<TemperaturePoint>,
    pub vibration: Vec<VibrationPoint>,
    pub gearbox_temperature: Vec<DatePoint>,
    pub gearbox_vibration: Vec<VibrationPoint>,
}

pub fn equipment_series(readings: &[Reading]) -> EquipmentSeries {
    let mut rows: Vec<&Reading> = readings.iter().collect();
    rows.sort_by_key(|r| r.date);

    EquipmentSeries {
        temperature: rows
            .iter()
            .map(|r| TemperaturePoint {
                date: r.date,
                driving_end_temp: r.driving_end_temp,
                driven_end_temp: r.driven_end_temp,
            })
            .collect(),
        vibration: rows
            .iter()
            .map(|r| VibrationPoint {
                date: r.date,
                rms_velocity: r.rms_velocity,
                peak_acceleration: r.peak_acceleration,
                displacement: r.displacement,
            })
            .collect(),
        gearbox_temperature: rows
            .iter()
            .map(|r| DatePoint {
                date: r.date,
                value: r.gearbox.temp,
            })
            .collect(),
        gearbox_vibration: rows
            .iter()
            .map(|r| VibrationPoint {
                date: r.date,
                rms_velocity: r.gearbox.rms_velocity,
                peak_acceleration: r.gearbox.peak_acceleration,
                displacement: r.gearbox.displacement,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Distributions
// ---------------------------------------------------------------------------

/// Oil level distributions for the machine and its gearbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OilDistribution {
    pub equipment: Vec<LevelCount>,
    pub gearbox: Vec<LevelCount>,
}

pub fn oil_distribution(readings: &[Reading]) -> OilDistribution {
    OilDistribution {
        equipment: value_counts(readings.iter().map(|r| r.oil_level)),
        gearbox: value_counts(readings.iter().map(|r| r.gearbox.oil_level)),
    }
}

/// Count occurrences, highest count first, ties in first-seen order.
fn value_counts(levels: impl Iterator<Item = OilLevel>) -> Vec<LevelCount> {
    let mut counts: Vec<LevelCount> = Vec::new();
    for level in levels {
        match counts.iter_mut().find(|c| c.level == level) {
            Some(c) => c.count += 1,
            None => counts.push(LevelCount { level, count: 1 }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn group_by_date(readings: &[Reading]) -> BTreeMap<ReadingDate, Vec<&Reading>> {
    let mut groups: BTreeMap<ReadingDate, Vec<&Reading>> = BTreeMap::new();
    for r in readings {
        groups.entry(r.date).or_default().push(r);
    }
    groups
}

fn running_count(rows: &[&Reading]) -> usize {
    rows.iter().filter(|r| r.is_running).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> ReadingDate {
        ReadingDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    fn running(d: u32, area: Area, tag: &str, driving: f64, driven: f64) -> Reading {
        let mut r = Reading::not_running(day(d), area, tag);
        r.is_running = true;
        r.driving_end_temp = driving;
        r.driven_end_temp = driven;
        r.oil_level = OilLevel::Normal;
        r
    }

    fn stopped(d: u32, area: Area, tag: &str) -> Reading {
        Reading::not_running(day(d), area, tag)
    }

    #[test]
    fn kpi_trends_group_by_date() {
        let readings = vec![
            running(2, Area::Reaction, "3-P-101", 60.0, 40.0),
            stopped(1, Area::Reaction, "3-P-201"),
            running(1, Area::Butene, "2-P-2701", 50.0, 30.0),
            running(2, Area::Reaction, "3-P-202", 70.0, 50.0),
        ];
        let trends = kpi_trends(&readings);

        assert_eq!(
            trends.compliance_rate,
            vec![
                DatePoint { date: day(1), value: 50.0 },
                DatePoint { date: day(2), value: 100.0 },
            ]
        );
        assert_eq!(
            trends.avg_temp,
            vec![
                DatePoint { date: day(1), value: 20.0 },
                DatePoint { date: day(2), value: 55.0 },
            ]
        );
        assert_eq!(trends.running_count[0].value, 1.0);
        assert_eq!(trends.running_count[1].value, 2.0);
        assert_eq!(
            trends.running_count_by_area,
            vec![
                AreaDatePoint { date: day(1), area: Area::Reaction, value: 0.0 },
                AreaDatePoint { date: day(1), area: Area::Butene, value: 1.0 },
                AreaDatePoint { date: day(2), area: Area::Reaction, value: 2.0 },
            ]
        );
    }

    #[test]
    fn empty_input_gives_empty_series() {
        let trends = kpi_trends(&[]);
        assert!(trends.compliance_rate.is_empty());
        assert!(trends.running_count_by_area.is_empty());
        assert!(running_percentage_by_area(&[]).is_empty());
    }

    #[test]
    fn running_share_per_area() {
        let readings = vec![
            running(1, Area::Finishing, "3-M-501", 40.0, 40.0),
            stopped(1, Area::Finishing, "3-M-502"),
            stopped(1, Area::Finishing, "3-M-503"),
            running(1, Area::Reaction, "3-P-101", 40.0, 40.0),
        ];
        let shares = running_percentage_by_area(&readings);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].area, Area::Reaction);
        assert_eq!(shares[0].running_percentage, 100.0);
        assert_eq!(shares[1].area, Area::Finishing);
        assert!((shares[1].running_percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn equipment_series_is_date_ordered() {
        let mut late = running(5, Area::Reaction, "3-P-101", 61.0, 50.0);
        late.rms_velocity = 3.3;
        late.gearbox.temp = 44.0;
        let early = running(1, Area::Reaction, "3-P-101", 55.0, 45.0);
        let series = equipment_series(&[late, early]);
        assert_eq!(series.temperature[0].date, day(1));
        assert_eq!(series.temperature[1].driving_end_temp, 61.0);
        assert_eq!(series.vibration[1].rms_velocity, 3.3);
        assert_eq!(series.gearbox_temperature[1].value, 44.0);
        assert_eq!(series.gearbox_vibration.len(), 2);
    }

    #[test]
    fn oil_distribution_counts_highest_first() {
        let mut low = running(1, Area::Reaction, "3-P-101", 40.0, 40.0);
        low.oil_level = OilLevel::Low;
        let readings = vec![
            stopped(1, Area::Reaction, "3-P-201"),
            low.clone(),
            low,
            running(2, Area::Reaction, "3-P-101", 40.0, 40.0),
        ];
        let dist = oil_distribution(&readings);
        assert_eq!(
            dist.equipment,
            vec![
                LevelCount { level: OilLevel::Low, count: 2 },
                LevelCount { level: OilLevel::NotApplicable, count: 1 },
                LevelCount { level: OilLevel::Normal, count: 1 },
            ]
        );
        assert_eq!(
            dist.gearbox,
            vec![LevelCount { level: OilLevel::NotApplicable, count: 4 }]
        );
    }
}
