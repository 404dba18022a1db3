//! Plant areas and the equipment tags registered under each of them.
//!
//! The roster drives the two-level area/equipment selector and is used to
//! reject submissions for a tag that does not belong to the chosen area.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Areas
// ---------------------------------------------------------------------------

pub const AREA_REACTION: &str = "Reaction";
pub const AREA_DISTILLATION: &str = "Distillation";
pub const AREA_FINISHING: &str = "Finishing";
pub const AREA_BUTENE: &str = "Butene";

/// All valid area names, in selector order.
pub const VALID_AREAS: &[&str] = &[AREA_REACTION, AREA_DISTILLATION, AREA_FINISHING, AREA_BUTENE];

/// A process area of the plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Area {
    Reaction,
    Distillation,
    Finishing,
    Butene,
}

impl Area {
    /// Every area, in selector order.
    pub const ALL: [Area; 4] = [Area::Reaction, Area::Distillation, Area::Finishing, Area::Butene];

    /// Convert from the stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            AREA_REACTION => Ok(Self::Reaction),
            AREA_DISTILLATION => Ok(Self::Distillation),
            AREA_FINISHING => Ok(Self::Finishing),
            AREA_BUTENE => Ok(Self::Butene),
            _ => Err(CoreError::Validation(format!(
                "Invalid area '{s}'. Must be one of: {}",
                VALID_AREAS.join(", ")
            ))),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reaction => AREA_REACTION,
            Self::Distillation => AREA_DISTILLATION,
            Self::Finishing => AREA_FINISHING,
            Self::Butene => AREA_BUTENE,
        }
    }

    /// Equipment tags registered under this area, in selector order.
    ///
    /// The Reaction list repeats the `3-P-301-*` train; the repeat is part of
    /// the plant register and is kept as-is. Use [`all_equipment`] for a
    /// de-duplicated list.
    pub fn equipment(&self) -> &'static [&'static str] {
        match self {
            Self::Reaction => REACTION_EQUIPMENT,
            Self::Distillation => DISTILLATION_EQUIPMENT,
            Self::Finishing => FINISHING_EQUIPMENT,
            Self::Butene => BUTENE_EQUIPMENT,
        }
    }

    /// Whether `tag` is registered under this area.
    pub fn contains(&self, tag: &str) -> bool {
        self.equipment().contains(&tag)
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Equipment register
// ---------------------------------------------------------------------------

const REACTION_EQUIPMENT: &[&str] = &[
    "3-P-101", "3-P-102-A", "3-P-102-B", "3-P-103-A", "3-P-103-B",
    "3-P-201", "3-P-202", "3-P-203", "3-P-204", "3-P-205", "3-P-206",
    "3-P-208", "3-P-209", "3-P-301-A", "3-P-301-B", "3-P-301-C",
    "3-K-101-A", "3-K-101-B", "3-K-301-A", "3-K-301-B", "3-P-301-A",
    "3-P-301-B", "3-P-301-C", "3-P-302-A", "3-P-302-B", "3-P-302-C",
    "3-P-303-A", "3-P-303-B", "3-P-304-A", "3-P-304-B", "3-P-305-A",
    "3-P-305-B", "3-P-306-A", "3-P-306-B", "3-M-301", "3-M-201",
    "3-M-203", "3-M-205", "3-M-207", "3-M-209", "3-P-401-A", "3-P-401-B",
    "3-K-102", "3-K-401", "3-K-402",
];

const DISTILLATION_EQUIPMENT: &[&str] = &[
    "3-P-901-A", "3-P-901-B", "3-P-902-A", "3-P-902-B", "3-P-903-A",
    "3-P-903-B", "3-P-903-C", "3-P-904-A", "3-P-904-B", "3-P-905-A",
    "3-P-905-B", "3-P-906-A", "3-P-906-B", "3-P-907-A", "3-P-907-B",
    "3-P-909-A", "3-P-909-B", "3-P-910-A", "3-P-910-B", "3-P-911-A",
    "3-P-911-B", "3-P-912-A", "3-P-912-B", "3-P-914-A", "3-P-914-B",
    "3-P-916-A", "3-P-916-B", "3-P-917", "3-K-901", "3-K-1001-A",
    "3-K-1001-B", "3-K-1001-C", "3-P-1001-A", "3-P-1001-B", "3-P-1001-C",
    "3-P-1001-D", "3-P-1001-E", "3-P-1001-F", "3-P-1011", "3-P-1101-A",
    "3-P-1101-B", "3-P-920-A", "3-P-920-B", "3-P-1102-A", "3-P-1102-B",
    "3-P-1121", "3-P-1122", "3-P-1201-A", "3-P-1201-B", "3-P-1202-A",
    "3-P-1202-B", "3-RUP-901", "3-RUK-901",
];

const FINISHING_EQUIPMENT: &[&str] = &[
    "3-P-501-A", "3-P-501-B", "3-P-502-A", "3-P-502-B", "3-P-503-A",
    "3-P-503-B", "3-P-504-A", "3-P-504-B", "3-P-601-A", "3-P-601-B",
    "3-P-601-C", "3-P-601-D", "3-P-602-A", "3-P-602-B", "3-P-602-C",
    "3-P-602-D", "3-P-603-A", "3-P-603-B", "3-P-604-A", "3-P-604-B",
    "3-P-604-C", "3-P-604-D", "3-P-605-1", "3-P-605-2", "3-P-606-1",
    "3-P-606-2", "3-P-607-1", "3-P-607-2", "3-P-608-1", "3-P-608-2",
    "3-P-609-1", "3-P-609-2", "3-P-610-1", "3-P-610-2", "3-P-611-1",
    "3-P-611-2", "3-P-612-1", "3-P-612-2", "3-K-602-A", "3-K-602-B",
    "3-K-602-C", "3-K-603-1", "3-K-603-2", "3-K-605-A", "3-K-605-B",
    "3-K-605-C", "3-K-605-D", "3-K-605-E", "3-K-605-F", "3-K-605-G",
    "3-K-606-A", "3-K-606-B", "3-K-606-C", "3-K-606-D", "3-K-606-E",
    "3-K-606-F", "3-K-606-G", "3-K-701-A", "3-K-701-B", "3-K-701-C",
    "3-K-701-D", "3-K-701-E", "3-K-701-F", "3-K-704-A", "3-K-704-B",
    "3-K-801-A", "3-K-801-B", "3-K-802-A", "3-K-802-B", "3-K-802-C",
    "3-M-501", "3-M-502", "3-M-503", "3-M-504", "3-M-505",
];

const BUTENE_EQUIPMENT: &[&str] = &[
    "2-P-2101-A", "2-P-2101-B", "2-P-2301-A", "2-P-2301-B",
    "2-P-2302-A", "2-P-2302-B", "2-P-2306-A", "2-P-2306-B",
    "2-P-2201-A", "2-P-2201-B", "2-P-2202-A", "2-P-2202-B",
    "2-P-2203-A", "2-P-2203-B", "2-P-2304-A", "2-P-2304-B",
    "2-P-2305-A", "2-P-2305-B", "2-P-2401-A", "2-P-2401-B",
    "2-P-2601-A", "2-P-2601-B", "2-P-2701", "2-P-2501-A",
    "2-P-2501-B", "2-P-2502-A", "2-P-2502-B", "2-P-2602-A",
    "2-P-2602-B", "2-P-2303-A", "2-P-2303-B",
];

/// Every registered tag across all areas, de-duplicated, in roster order.
pub fn all_equipment() -> Vec<&'static str> {
    let mut seen = std::collections::HashSet::new();
    Area::ALL
        .iter()
        .flat_map(|area| area.equipment().iter().copied())
        .filter(|tag| seen.insert(*tag))
        .collect()
}

/// Find the area a tag is registered under.
pub fn area_of(tag: &str) -> Option<Area> {
    Area::ALL.into_iter().find(|area| area.contains(tag))
}

/// Reject a tag that is not registered under `area`.
pub fn validate_membership(area: Area, tag: &str) -> Result<(), CoreError> {
    if area.contains(tag) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Equipment '{tag}' is not registered in the {area} area"
    )))
}
