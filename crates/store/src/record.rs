//! On-disk row layout of the reading file.
//!
//! Column names are the human-readable headers the file has always used.
//! Categoricals are stored as their display strings and converted through
//! the core `from_str_value` helpers, so the file format does not depend on
//! the serde representation of the core types.

use chrono::NaiveDateTime;
use condmon_core::error::CoreError;
use condmon_core::reading::{GearboxReading, Indicator, OilLevel, Reading, NOT_APPLICABLE};
use condmon_core::roster::Area;
use condmon_core::types::ReadingDate;
use serde::{Deserialize, Serialize};

/// Column headers, in file order.
pub const HEADER: [&str; 20] = [
    "Date",
    "Area",
    "Equipment",
    "Is Running",
    "Driving End Temp",
    "Driven End Temp",
    "Oil Level",
    "Abnormal Sound",
    "Leakage",
    "Observation",
    "RMS Velocity (mm/s)",
    "Peak Acceleration (g)",
    "Displacement (µm)",
    "Gearbox Temp",
    "Gearbox Oil Level",
    "Gearbox Leakage",
    "Gearbox Abnormal Sound",
    "Gearbox RMS Velocity (mm/s)",
    "Gearbox Peak Acceleration (g)",
    "Gearbox Displacement (µm)",
];

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Why a decoded row could not become a [`Reading`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Unparsable date '{0}'")]
    Date(String),

    #[error(transparent)]
    Field(#[from] CoreError),
}

/// One row of the reading file.
///
/// Every column after `Is Running` is optional so rows written before the
/// gearbox columns existed still load. Missing numbers read as zero and
/// missing categoricals as `N/A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Area")]
    pub area: String,
    #[serde(rename = "Equipment")]
    pub equipment: String,
    #[serde(rename = "Is Running", with = "python_bool")]
    pub is_running: bool,
    #[serde(rename = "Driving End Temp", default)]
    pub driving_end_temp: Option<f64>,
    #[serde(rename = "Driven End Temp", default)]
    pub driven_end_temp: Option<f64>,
    #[serde(rename = "Oil Level", default)]
    pub oil_level: Option<String>,
    #[serde(rename = "Abnormal Sound", default)]
    pub abnormal_sound: Option<String>,
    #[serde(rename = "Leakage", default)]
    pub leakage: Option<String>,
    #[serde(rename = "Observation", default)]
    pub observation: Option<String>,
    #[serde(rename = "RMS Velocity (mm/s)", default)]
    pub rms_velocity: Option<f64>,
    #[serde(rename = "Peak Acceleration (g)", default)]
    pub peak_acceleration: Option<f64>,
    #[serde(rename = "Displacement (µm)", default)]
    pub displacement: Option<f64>,
    #[serde(rename = "Gearbox Temp", default)]
    pub gearbox_temp: Option<f64>,
    #[serde(rename = "Gearbox Oil Level", default)]
    pub gearbox_oil_level: Option<String>,
    #[serde(rename = "Gearbox Leakage", default)]
    pub gearbox_leakage: Option<String>,
    #[serde(rename = "Gearbox Abnormal Sound", default)]
    pub gearbox_abnormal_sound: Option<String>,
    #[serde(rename = "Gearbox RMS Velocity (mm/s)", default)]
    pub gearbox_rms_velocity: Option<f64>,
    #[serde(rename = "Gearbox Peak Acceleration (g)", default)]
    pub gearbox_peak_acceleration: Option<f64>,
    #[serde(rename = "Gearbox Displacement (µm)", default)]
    pub gearbox_displacement: Option<f64>,
}

impl From<&Reading> for ReadingRecord {
    fn from(r: &Reading) -> Self {
        Self {
            date: r.date.format(DATE_FORMAT).to_string(),
            area: r.area.as_str().to_string(),
            equipment: r.equipment.clone(),
            is_running: r.is_running,
            driving_end_temp: Some(r.driving_end_temp),
            driven_end_temp: Some(r.driven_end_temp),
            oil_level: Some(r.oil_level.as_str().to_string()),
            abnormal_sound: Some(r.abnormal_sound.as_str().to_string()),
            leakage: Some(r.leakage.as_str().to_string()),
            observation: Some(r.observation.clone()),
            rms_velocity: Some(r.rms_velocity),
            peak_acceleration: Some(r.peak_acceleration),
            displacement: Some(r.displacement),
            gearbox_temp: Some(r.gearbox.temp),
            gearbox_oil_level: Some(r.gearbox.oil_level.as_str().to_string()),
            gearbox_leakage: Some(r.gearbox.leakage.as_str().to_string()),
            gearbox_abnormal_sound: Some(r.gearbox.abnormal_sound.as_str().to_string()),
            gearbox_rms_velocity: Some(r.gearbox.rms_velocity),
            gearbox_peak_acceleration: Some(r.gearbox.peak_acceleration),
            gearbox_displacement: Some(r.gearbox.displacement),
        }
    }
}

impl ReadingRecord {
    /// Convert the raw row into a domain reading.
    pub fn into_reading(self) -> Result<Reading, RecordError> {
        let date = parse_date(&self.date).ok_or_else(|| RecordError::Date(self.date.clone()))?;

        Ok(Reading {
            date,
            area: Area::from_str_value(self.area.trim())?,
            equipment: self.equipment.trim().to_string(),
            is_running: self.is_running,
            driving_end_temp: self.driving_end_temp.unwrap_or_default(),
            driven_end_temp: self.driven_end_temp.unwrap_or_default(),
            oil_level: oil_level(self.oil_level.as_deref())?,
            abnormal_sound: indicator(self.abnormal_sound.as_deref())?,
            leakage: indicator(self.leakage.as_deref())?,
            observation: self.observation.unwrap_or_default(),
            rms_velocity: self.rms_velocity.unwrap_or_default(),
            peak_acceleration: self.peak_acceleration.unwrap_or_default(),
            displacement: self.displacement.unwrap_or_default(),
            gearbox: GearboxReading {
                temp: self.gearbox_temp.unwrap_or_default(),
                oil_level: oil_level(self.gearbox_oil_level.as_deref())?,
                leakage: indicator(self.gearbox_leakage.as_deref())?,
                abnormal_sound: indicator(self.gearbox_abnormal_sound.as_deref())?,
                rms_velocity: self.gearbox_rms_velocity.unwrap_or_default(),
                peak_acceleration: self.gearbox_peak_acceleration.unwrap_or_default(),
                displacement: self.gearbox_displacement.unwrap_or_default(),
            },
        })
    }
}

/// Accepts plain dates and the timestamped form older files contain.
pub fn parse_date(value: &str) -> Option<ReadingDate> {
    let value = value.trim();
    ReadingDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
}

fn oil_level(value: Option<&str>) -> Result<OilLevel, CoreError> {
    OilLevel::from_str_value(value.map(str::trim).unwrap_or(NOT_APPLICABLE))
}

fn indicator(value: Option<&str>) -> Result<Indicator, CoreError> {
    Indicator::from_str_value(value.map(str::trim).unwrap_or(NOT_APPLICABLE))
}

/// `True`/`False` on write; any casing of `true`, or `1`, reads as true.
mod python_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "True" } else { "False" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();
        Ok(raw.eq_ignore_ascii_case("true") || raw == "1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_date_forms() {
        let expected = ReadingDate::from_ymd_opt(2024, 8, 14);
        assert_eq!(parse_date("2024-08-14"), expected);
        assert_eq!(parse_date("2024-08-14 00:00:00"), expected);
        assert_eq!(parse_date("14/08/2024"), None);
    }

    #[test]
    fn empty_categoricals_read_as_not_applicable() {
        assert_eq!(oil_level(None).unwrap(), OilLevel::NotApplicable);
        assert_eq!(indicator(Some(" Yes ")).unwrap(), Indicator::Yes);
        assert!(oil_level(Some("Empty")).is_err());
    }

    #[test]
    fn reading_survives_record_conversion() {
        let date = ReadingDate::from_ymd_opt(2024, 8, 14).unwrap();
        let mut reading = Reading::not_running(date, Area::Distillation, "3-P-405-A");
        reading.is_running = true;
        reading.driving_end_temp = 48.25;
        reading.oil_level = OilLevel::High;
        reading.abnormal_sound = Indicator::No;
        reading.leakage = Indicator::Yes;
        reading.observation = "Minor seepage at seal".into();
        reading.gearbox.temp = 39.5;

        let record = ReadingRecord::from(&reading);
        assert_eq!(record.date, "2024-08-14");
        assert_eq!(record.area, "Distillation");
        assert_eq!(record.into_reading().unwrap(), reading);
    }
}
