//! Per-equipment alarm limits.
//!
//! Limits are hand-curated per asset tag and compiled in; they are not
//! derived from reading history. A reading exceeds its limits when any of the
//! monitored quantities is strictly greater than the configured maximum.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::reading::Reading;

/// Maximum acceptable values for one piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquipmentThreshold {
    /// Driving end bearing temperature limit in °C.
    pub driving_end_temp_max: f64,
    /// Driven end bearing temperature limit in °C.
    pub driven_end_temp_max: f64,
    /// RMS velocity limit in mm/s.
    pub rms_velocity_max: f64,
}

impl EquipmentThreshold {
    pub fn new(driving_end_temp_max: f64, driven_end_temp_max: f64, rms_velocity_max: f64) -> Self {
        Self {
            driving_end_temp_max,
            driven_end_temp_max,
            rms_velocity_max,
        }
    }

    /// Whether `reading` exceeds any of the three limits.
    pub fn is_exceeded_by(&self, reading: &Reading) -> bool {
        reading.driving_end_temp > self.driving_end_temp_max
            || reading.driven_end_temp > self.driven_end_temp_max
            || reading.rms_velocity > self.rms_velocity_max
    }
}

/// Lookup table from equipment tag to its limits.
#[derive(Debug, Clone, Default)]
pub struct ThresholdTable {
    entries: HashMap<String, EquipmentThreshold>,
}

impl ThresholdTable {
    /// An empty table. Nothing is ever flagged against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// The plant's compiled-in limits.
    pub fn plant() -> Self {
        PLANT_THRESHOLDS
            .iter()
            .map(|&(tag, driving, driven, rms)| {
                (tag.to_string(), EquipmentThreshold::new(driving, driven, rms))
            })
            .collect()
    }

    pub fn insert(&mut self, tag: impl Into<String>, threshold: EquipmentThreshold) {
        self.entries.insert(tag.into(), threshold);
    }

    pub fn get(&self, tag: &str) -> Option<&EquipmentThreshold> {
        self.entries.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by tag.
    pub fn sorted(&self) -> BTreeMap<&str, EquipmentThreshold> {
        self.entries
            .iter()
            .map(|(tag, threshold)| (tag.as_str(), *threshold))
            .collect()
    }
}

impl FromIterator<(String, EquipmentThreshold)> for ThresholdTable {
    fn from_iter<I: IntoIterator<Item = (String, EquipmentThreshold)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// (tag, driving end °C, driven end °C, RMS velocity mm/s)
#[rustfmt::skip]
const PLANT_THRESHOLDS: &[(&str, f64, f64, f64)] = &[
    // Reaction
    ("3-P-101", 60.0, 80.0, 4.0),
    ("3-P-102-A", 62.0, 62.0, 4.5),
    ("3-P-102-B", 62.0, 62.0, 4.5),
    ("3-P-103-A", 58.0, 58.0, 4.0),
    ("3-P-103-B", 58.0, 58.0, 4.0),
    ("3-P-201", 65.0, 65.0, 4.8),
    ("3-P-202", 63.0, 63.0, 4.6),
    ("3-P-203", 50.0, 50.0, 4.0),
    ("3-P-204", 55.0, 55.0, 4.5),
    ("3-P-205", 62.0, 62.0, 4.7),
    ("3-P-206", 60.0, 60.0, 4.2),
    ("3-P-208", 59.0, 59.0, 4.1),
    ("3-P-209", 61.0, 61.0, 4.3),
    ("3-P-301-A", 70.0, 70.0, 6.0),
    ("3-P-301-B", 65.0, 65.0, 5.5),
    ("3-P-301-C", 68.0, 68.0, 5.8),
    ("3-K-101-A", 58.0, 58.0, 4.2),
    ("3-K-101-B", 58.0, 58.0, 4.2),
    ("3-K-301-A", 62.0, 62.0, 4.6),
    ("3-K-301-B", 62.0, 62.0, 4.6),
    ("3-P-302-A", 60.0, 60.0, 4.5),
    ("3-P-302-B", 60.0, 60.0, 4.5),
    ("3-P-302-C", 58.0, 58.0, 4.3),
    ("3-P-303-A", 57.0, 57.0, 4.0),
    ("3-P-303-B", 57.0, 57.0, 4.0),
    ("3-P-304-A", 58.0, 58.0, 4.3),
    ("3-P-304-B", 58.0, 58.0, 4.3),
    ("3-P-305-A", 60.0, 60.0, 4.5),
    ("3-P-305-B", 60.0, 60.0, 4.5),
    ("3-P-306-A", 63.0, 63.0, 4.8),
    ("3-P-306-B", 63.0, 63.0, 4.8),
    ("3-M-301", 65.0, 65.0, 5.0),
    ("3-M-201", 62.0, 62.0, 4.7),
    ("3-M-203", 60.0, 60.0, 4.5),
    ("3-M-205", 61.0, 61.0, 4.5),
    ("3-M-207", 60.0, 60.0, 4.4),
    ("3-M-209", 60.0, 60.0, 4.4),
    ("3-P-401-A", 65.0, 65.0, 5.0),
    ("3-P-401-B", 65.0, 65.0, 5.0),
    ("3-K-102", 62.0, 62.0, 4.7),
    ("3-K-401", 64.0, 64.0, 4.8),
    ("3-K-402", 64.0, 64.0, 4.8),
    // Distillation
    ("3-P-901-A", 62.0, 62.0, 4.8),
    ("3-P-901-B", 62.0, 62.0, 4.8),
    ("3-P-902-A", 60.0, 60.0, 4.5),
    ("3-P-902-B", 60.0, 60.0, 4.5),
    ("3-P-903-A", 65.0, 65.0, 5.0),
    ("3-P-903-B", 65.0, 65.0, 5.0),
    ("3-P-903-C", 67.0, 67.0, 5.3),
    ("3-P-904-A", 60.0, 60.0, 4.5),
    ("3-P-904-B", 60.0, 60.0, 4.5),
    ("3-P-905-A", 58.0, 58.0, 4.2),
    ("3-P-905-B", 58.0, 58.0, 4.2),
    ("3-P-906-A", 63.0, 63.0, 4.7),
    ("3-P-906-B", 63.0, 63.0, 4.7),
    ("3-P-907-A", 64.0, 64.0, 4.9),
    ("3-P-907-B", 64.0, 64.0, 4.9),
    ("3-P-909-A", 60.0, 60.0, 4.5),
    ("3-P-909-B", 60.0, 60.0, 4.5),
    ("3-P-910-A", 62.0, 62.0, 4.7),
    ("3-P-910-B", 62.0, 62.0, 4.7),
    ("3-P-911-A", 66.0, 66.0, 5.2),
    ("3-P-911-B", 66.0, 66.0, 5.2),
    ("3-P-912-A", 64.0, 64.0, 4.8),
    ("3-P-912-B", 64.0, 64.0, 4.8),
    ("3-P-914-A", 58.0, 58.0, 4.2),
    ("3-P-914-B", 58.0, 58.0, 4.2),
    ("3-P-916-A", 65.0, 65.0, 5.1),
    ("3-P-916-B", 65.0, 65.0, 5.1),
    ("3-P-917", 63.0, 63.0, 4.6),
    ("3-K-901", 60.0, 60.0, 4.5),
    ("3-K-1001-A", 62.0, 62.0, 4.7),
    ("3-K-1001-B", 62.0, 62.0, 4.7),
    ("3-K-1001-C", 63.0, 63.0, 4.9),
    ("3-P-1001-A", 64.0, 64.0, 4.8),
    ("3-P-1001-B", 64.0, 64.0, 4.8),
    ("3-P-1001-C", 65.0, 65.0, 5.0),
    ("3-P-1001-D", 65.0, 65.0, 5.0),
    ("3-P-1001-E", 63.0, 63.0, 4.7),
    ("3-P-1001-F", 63.0, 63.0, 4.7),
    ("3-P-1011", 64.0, 64.0, 4.9),
    ("3-P-1101-A", 62.0, 62.0, 4.7),
    ("3-P-1101-B", 62.0, 62.0, 4.7),
    ("3-P-920-A", 60.0, 60.0, 4.5),
    ("3-P-920-B", 60.0, 60.0, 4.5),
    ("3-P-1102-A", 62.0, 62.0, 4.7),
    ("3-P-1102-B", 62.0, 62.0, 4.7),
    ("3-P-1121", 63.0, 63.0, 4.6),
    ("3-P-1122", 63.0, 63.0, 4.6),
    ("3-P-1201-A", 65.0, 65.0, 5.2),
    ("3-P-1201-B", 65.0, 65.0, 5.2),
    ("3-P-1202-A", 64.0, 64.0, 4.8),
    ("3-P-1202-B", 64.0, 64.0, 4.8),
    ("3-RUP-901", 62.0, 62.0, 4.6),
    ("3-RUK-901", 62.0, 62.0, 4.6),
    // Finishing
    ("3-P-501-A", 58.0, 58.0, 4.2),
    ("3-P-501-B", 58.0, 58.0, 4.2),
    ("3-P-502-A", 60.0, 60.0, 4.5),
    ("3-P-502-B", 60.0, 60.0, 4.5),
    ("3-P-503-A", 62.0, 62.0, 4.7),
    ("3-P-503-B", 62.0, 62.0, 4.7),
    ("3-P-504-A", 63.0, 63.0, 4.8),
    ("3-P-504-B", 63.0, 63.0, 4.8),
    ("3-P-601-A", 65.0, 65.0, 5.2),
    ("3-P-601-B", 65.0, 65.0, 5.2),
    ("3-P-601-C", 64.0, 64.0, 4.9),
    ("3-P-601-D", 64.0, 64.0, 4.9),
    ("3-P-602-A", 63.0, 63.0, 4.8),
    ("3-P-602-B", 63.0, 63.0, 4.8),
    ("3-P-602-C", 62.0, 62.0, 4.7),
    ("3-P-602-D", 62.0, 62.0, 4.7),
    ("3-P-603-A", 61.0, 61.0, 4.6),
    ("3-P-603-B", 61.0, 61.0, 4.6),
    ("3-P-604-A", 60.0, 60.0, 4.5),
    ("3-P-604-B", 60.0, 60.0, 4.5),
    ("3-P-604-C", 59.0, 59.0, 4.4),
    ("3-P-604-D", 59.0, 59.0, 4.4),
    ("3-P-605-1", 58.0, 58.0, 4.3),
    ("3-P-605-2", 58.0, 58.0, 4.3),
    ("3-P-606-1", 62.0, 62.0, 4.7),
    ("3-P-606-2", 62.0, 62.0, 4.7),
    ("3-P-607-1", 61.0, 61.0, 4.6),
    ("3-P-607-2", 61.0, 61.0, 4.6),
    ("3-P-608-1", 60.0, 60.0, 4.5),
    ("3-P-608-2", 60.0, 60.0, 4.5),
    ("3-P-609-1", 58.0, 58.0, 4.3),
    ("3-P-609-2", 58.0, 58.0, 4.3),
    ("3-P-610-1", 57.0, 57.0, 4.2),
    ("3-P-610-2", 57.0, 57.0, 4.2),
    ("3-P-611-1", 63.0, 63.0, 4.8),
    ("3-P-611-2", 63.0, 63.0, 4.8),
    ("3-P-612-1", 64.0, 64.0, 4.9),
    ("3-P-612-2", 64.0, 64.0, 4.9),
    ("3-K-602-A", 62.0, 62.0, 4.7),
    ("3-K-602-B", 62.0, 62.0, 4.7),
    ("3-K-602-C", 63.0, 63.0, 4.8),
    ("3-K-603-1", 64.0, 64.0, 4.9),
    ("3-K-603-2", 64.0, 64.0, 4.9),
    ("3-K-605-A", 65.0, 65.0, 5.1),
    ("3-K-605-B", 65.0, 65.0, 5.1),
    ("3-K-605-C", 64.0, 64.0, 4.9),
    ("3-K-605-D", 64.0, 64.0, 4.9),
    ("3-K-605-E", 63.0, 63.0, 4.8),
    ("3-K-605-F", 63.0, 63.0, 4.8),
    ("3-K-605-G", 62.0, 62.0, 4.7),
    ("3-K-606-A", 61.0, 61.0, 4.6),
    ("3-K-606-B", 61.0, 61.0, 4.6),
    ("3-K-606-C", 60.0, 60.0, 4.5),
    ("3-K-606-D", 60.0, 60.0, 4.5),
    ("3-K-606-E", 59.0, 59.0, 4.4),
    ("3-K-606-F", 59.0, 59.0, 4.4),
    ("3-K-606-G", 58.0, 58.0, 4.3),
    ("3-K-701-A", 63.0, 63.0, 4.8),
    ("3-K-701-B", 63.0, 63.0, 4.8),
    ("3-K-701-C", 64.0, 64.0, 4.9),
    ("3-K-701-D", 64.0, 64.0, 4.9),
    ("3-K-701-E", 65.0, 65.0, 5.0),
    ("3-K-701-F", 65.0, 65.0, 5.0),
    ("3-K-704-A", 62.0, 62.0, 4.7),
    ("3-K-704-B", 62.0, 62.0, 4.7),
    ("3-K-801-A", 60.0, 60.0, 4.5),
    ("3-K-801-B", 60.0, 60.0, 4.5),
    ("3-K-802-A", 63.0, 63.0, 4.8),
    ("3-K-802-B", 63.0, 63.0, 4.8),
    ("3-K-802-C", 64.0, 64.0, 4.9),
    ("3-M-501", 62.0, 62.0, 4.7),
    ("3-M-502", 61.0, 61.0, 4.6),
    ("3-M-503", 60.0, 60.0, 4.5),
    ("3-M-504", 58.0, 58.0, 4.3),
    ("3-M-505", 63.0, 63.0, 4.8),
    // Butene
    ("2-P-2101-A", 55.0, 55.0, 3.8),
    ("2-P-2101-B", 55.0, 55.0, 3.8),
    ("2-P-2301-A", 58.0, 58.0, 4.2),
    ("2-P-2301-B", 58.0, 58.0, 4.2),
    ("2-P-2302-A", 60.0, 60.0, 4.5),
    ("2-P-2302-B", 60.0, 60.0, 4.5),
    ("2-P-2306-A", 62.0, 62.0, 4.7),
    ("2-P-2306-B", 62.0, 62.0, 4.7),
    ("2-P-2201-A", 63.0, 63.0, 4.8),
    ("2-P-2201-B", 63.0, 63.0, 4.8),
    ("2-P-2202-A", 64.0, 64.0, 4.9),
    ("2-P-2202-B", 64.0, 64.0, 4.9),
    ("2-P-2203-A", 65.0, 65.0, 5.0),
    ("2-P-2203-B", 65.0, 65.0, 5.0),
    ("2-P-2304-A", 63.0, 63.0, 4.8),
    ("2-P-2304-B", 63.0, 63.0, 4.8),
    ("2-P-2305-A", 62.0, 62.0, 4.7),
    ("2-P-2305-B", 62.0, 62.0, 4.7),
    ("2-P-2401-A", 60.0, 60.0, 4.5),
    ("2-P-2401-B", 60.0, 60.0, 4.5),
    ("2-P-2601-A", 58.0, 58.0, 4.3),
    ("2-P-2601-B", 58.0, 58.0, 4.3),
    ("2-P-2701", 57.0, 57.0, 4.2),
    ("2-P-2501-A", 62.0, 62.0, 4.7),
    ("2-P-2501-B", 62.0, 62.0, 4.7),
    ("2-P-2502-A", 61.0, 61.0, 4.6),
    ("2-P-2502-B", 61.0, 61.0, 4.6),
    ("2-P-2602-A", 60.0, 60.0, 4.5),
    ("2-P-2602-B", 60.0, 60.0, 4.5),
    ("2-P-2303-A", 58.0, 58.0, 4.3),
    ("2-P-2303-B", 58.0, 58.0, 4.3),
];
