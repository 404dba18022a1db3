//! Condition monitoring readings.
//!
//! A [`Reading`] is one row of the reading store: a single submission for a
//! single piece of equipment on a single date. Readings for equipment that is
//! not running carry zeroed numbers and the `N/A` sentinel in every
//! categorical field.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::roster::Area;
use crate::types::{EquipmentTag, ReadingDate};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Sentinel stored in categorical fields that do not apply.
pub const NOT_APPLICABLE: &str = "N/A";

/// Observation recorded for equipment that was not running.
pub const OBSERVATION_NOT_RUNNING: &str = "Not Running";

pub const OIL_NORMAL: &str = "Normal";
pub const OIL_LOW: &str = "Low";
pub const OIL_HIGH: &str = "High";

/// All valid oil level strings, sentinel included.
pub const VALID_OIL_LEVELS: &[&str] = &[OIL_NORMAL, OIL_LOW, OIL_HIGH, NOT_APPLICABLE];

pub const INDICATOR_NO: &str = "No";
pub const INDICATOR_YES: &str = "Yes";

/// All valid yes/no indicator strings, sentinel included.
pub const VALID_INDICATORS: &[&str] = &[INDICATOR_NO, INDICATOR_YES, NOT_APPLICABLE];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lubricant level observed in a sight glass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OilLevel {
    Normal,
    Low,
    High,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl OilLevel {
    /// Convert from the stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            OIL_NORMAL => Ok(Self::Normal),
            OIL_LOW => Ok(Self::Low),
            OIL_HIGH => Ok(Self::High),
            NOT_APPLICABLE => Ok(Self::NotApplicable),
            _ => Err(CoreError::Validation(format!(
                "Invalid oil level '{s}'. Must be one of: {}",
                VALID_OIL_LEVELS.join(", ")
            ))),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => OIL_NORMAL,
            Self::Low => OIL_LOW,
            Self::High => OIL_HIGH,
            Self::NotApplicable => NOT_APPLICABLE,
        }
    }
}

/// A yes/no observation such as abnormal sound or leakage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    No,
    Yes,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Indicator {
    /// Convert from the stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            INDICATOR_NO => Ok(Self::No),
            INDICATOR_YES => Ok(Self::Yes),
            NOT_APPLICABLE => Ok(Self::NotApplicable),
            _ => Err(CoreError::Validation(format!(
                "Invalid indicator '{s}'. Must be one of: {}",
                VALID_INDICATORS.join(", ")
            ))),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::No => INDICATOR_NO,
            Self::Yes => INDICATOR_YES,
            Self::NotApplicable => NOT_APPLICABLE,
        }
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Gearbox sub-readings. Zeroed with `N/A` categoricals when the equipment
/// has no gearbox or is not running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearboxReading {
    pub temp: f64,
    pub oil_level: OilLevel,
    pub leakage: Indicator,
    pub abnormal_sound: Indicator,
    pub rms_velocity: f64,
    pub peak_acceleration: f64,
    pub displacement: f64,
}

impl GearboxReading {
    /// Gearbox fields for equipment without a gearbox.
    pub fn absent() -> Self {
        Self {
            temp: 0.0,
            oil_level: OilLevel::NotApplicable,
            leakage: Indicator::NotApplicable,
            abnormal_sound: Indicator::NotApplicable,
            rms_velocity: 0.0,
            peak_acceleration: 0.0,
            displacement: 0.0,
        }
    }
}

impl Default for GearboxReading {
    fn default() -> Self {
        Self::absent()
    }
}

/// One submitted monitoring record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub date: ReadingDate,
    pub area: Area,
    pub equipment: EquipmentTag,
    pub is_running: bool,
    /// Driving end bearing temperature in °C.
    pub driving_end_temp: f64,
    /// Driven end bearing temperature in °C.
    pub driven_end_temp: f64,
    pub oil_level: OilLevel,
    pub abnormal_sound: Indicator,
    pub leakage: Indicator,
    pub observation: String,
    /// Vibration RMS velocity in mm/s.
    pub rms_velocity: f64,
    /// Vibration peak acceleration in g.
    pub peak_acceleration: f64,
    /// Vibration displacement in µm.
    pub displacement: f64,
    pub gearbox: GearboxReading,
}

impl Reading {
    /// Record for equipment that was found stopped.
    pub fn not_running(date: ReadingDate, area: Area, equipment: impl Into<EquipmentTag>) -> Self {
        Self {
            date,
            area,
            equipment: equipment.into(),
            is_running: false,
            driving_end_temp: 0.0,
            driven_end_temp: 0.0,
            oil_level: OilLevel::NotApplicable,
            abnormal_sound: Indicator::NotApplicable,
            leakage: Indicator::NotApplicable,
            observation: OBSERVATION_NOT_RUNNING.to_string(),
            rms_velocity: 0.0,
            peak_acceleration: 0.0,
            displacement: 0.0,
            gearbox: GearboxReading::absent(),
        }
    }

    /// Mean of the two bearing temperatures.
    pub fn mean_bearing_temp(&self) -> f64 {
        (self.driving_end_temp + self.driven_end_temp) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oil_level_string_round_trip() {
        for s in VALID_OIL_LEVELS {
            assert_eq!(OilLevel::from_str_value(s).unwrap().as_str(), *s);
        }
        assert!(OilLevel::from_str_value("Empty").is_err());
    }

    #[test]
    fn indicator_string_round_trip() {
        for s in VALID_INDICATORS {
            assert_eq!(Indicator::from_str_value(s).unwrap().as_str(), *s);
        }
        assert!(Indicator::from_str_value("yes").is_err());
    }

    #[test]
    fn not_running_reading_is_zeroed() {
        let date = ReadingDate::from_ymd_opt(2024, 5, 1).unwrap();
        let r = Reading::not_running(date, Area::Reaction, "3-P-101");
        assert!(!r.is_running);
        assert_eq!(r.driving_end_temp, 0.0);
        assert_eq!(r.oil_level, OilLevel::NotApplicable);
        assert_eq!(r.leakage, Indicator::NotApplicable);
        assert_eq!(r.observation, OBSERVATION_NOT_RUNNING);
        assert_eq!(r.gearbox, GearboxReading::absent());
    }

    #[test]
    fn sentinel_serializes_as_na() {
        let json = serde_json::to_value(OilLevel::NotApplicable).unwrap();
        assert_eq!(json, "N/A");
        let json = serde_json::to_value(Indicator::Yes).unwrap();
        assert_eq!(json, "Yes");
    }
}
