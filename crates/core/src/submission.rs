//! Reading submission: the payload the data entry form sends, its input
//! range constraints, and its conversion into a stored [`Reading`].

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::reading::{GearboxReading, Indicator, OilLevel, Reading};
use crate::roster::{self, Area};
use crate::types::{EquipmentTag, ReadingDate};

// ---------------------------------------------------------------------------
// Input ranges
// ---------------------------------------------------------------------------

pub const TEMP_MAX_CELSIUS: f64 = 200.0;
pub const RMS_VELOCITY_MAX: f64 = 100.0;
pub const PEAK_ACCELERATION_MAX: f64 = 10.0;
pub const DISPLACEMENT_MAX: f64 = 1000.0;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Vibration measurements taken on the machine or on its gearbox.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VibrationInput {
    #[validate(range(min = 0.0, max = 100.0))]
    pub rms_velocity: f64,
    #[validate(range(min = 0.0, max = 10.0))]
    pub peak_acceleration: f64,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub displacement: f64,
}

/// Gearbox section of the form, present only when the equipment has one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GearboxInput {
    #[validate(range(min = 0.0, max = 200.0))]
    pub temp: f64,
    pub oil_level: OilLevel,
    pub leakage: Indicator,
    pub abnormal_sound: Indicator,
    #[validate(nested)]
    #[serde(default)]
    pub vibration: VibrationInput,
}

/// Condition fields captured for running equipment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RunningCondition {
    #[validate(range(min = 0.0, max = 200.0))]
    pub driving_end_temp: f64,
    #[validate(range(min = 0.0, max = 200.0))]
    pub driven_end_temp: f64,
    pub oil_level: OilLevel,
    pub abnormal_sound: Indicator,
    pub leakage: Indicator,
    #[serde(default)]
    pub observation: String,
    #[validate(nested)]
    pub vibration: VibrationInput,
    #[validate(nested)]
    #[serde(default)]
    pub gearbox: Option<GearboxInput>,
}

/// A reading as submitted from the data entry form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewReading {
    pub date: ReadingDate,
    pub area: Area,
    #[validate(length(min = 1))]
    pub equipment: EquipmentTag,
    pub is_running: bool,
    /// Required when `is_running` is true, ignored otherwise.
    #[validate(nested)]
    #[serde(default)]
    pub condition: Option<RunningCondition>,
}

impl NewReading {
    /// Validate the submission and build the row to append.
    ///
    /// Stopped equipment gets zeroed numbers and `N/A` categoricals whatever
    /// condition fields were sent. Running equipment without a gearbox gets
    /// zeroed gearbox fields.
    pub fn into_reading(self) -> Result<Reading, CoreError> {
        self.validate()?;
        roster::validate_membership(self.area, &self.equipment)?;

        if !self.is_running {
            return Ok(Reading::not_running(self.date, self.area, self.equipment));
        }

        let condition = self.condition.ok_or_else(|| {
            CoreError::Validation(
                "Please provide temperature values if the equipment is running".into(),
            )
        })?;

        reject_sentinel_oil(condition.oil_level, "oil_level")?;
        reject_sentinel_indicator(condition.abnormal_sound, "abnormal_sound")?;
        reject_sentinel_indicator(condition.leakage, "leakage")?;

        let gearbox = match condition.gearbox {
            Some(g) => {
                reject_sentinel_oil(g.oil_level, "gearbox.oil_level")?;
                reject_sentinel_indicator(g.leakage, "gearbox.leakage")?;
                reject_sentinel_indicator(g.abnormal_sound, "gearbox.abnormal_sound")?;
                GearboxReading {
                    temp: g.temp,
                    oil_level: g.oil_level,
                    leakage: g.leakage,
                    abnormal_sound: g.abnormal_sound,
                    rms_velocity: g.vibration.rms_velocity,
                    peak_acceleration: g.vibration.peak_acceleration,
                    displacement: g.vibration.displacement,
                }
            }
            None => GearboxReading::absent(),
        };

        Ok(Reading {
            date: self.date,
            area: self.area,
            equipment: self.equipment,
            is_running: true,
            driving_end_temp: condition.driving_end_temp,
            driven_end_temp: condition.driven_end_temp,
            oil_level: condition.oil_level,
            abnormal_sound: condition.abnormal_sound,
            leakage: condition.leakage,
            observation: condition.observation,
            rms_velocity: condition.vibration.rms_velocity,
            peak_acceleration: condition.vibration.peak_acceleration,
            displacement: condition.vibration.displacement,
            gearbox,
        })
    }
}

fn reject_sentinel_oil(level: OilLevel, field: &str) -> Result<(), CoreError> {
    if level == OilLevel::NotApplicable {
        return Err(CoreError::Validation(format!(
            "{field} must be Normal, Low or High for running equipment"
        )));
    }
    Ok(())
}

fn reject_sentinel_indicator(value: Indicator, field: &str) -> Result<(), CoreError> {
    if value == Indicator::NotApplicable {
        return Err(CoreError::Validation(format!(
            "{field} must be No or Yes for running equipment"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::reading::OBSERVATION_NOT_RUNNING;

    fn date() -> ReadingDate {
        ReadingDate::from_ymd_opt(2024, 3, 11).unwrap()
    }

    fn condition() -> RunningCondition {
        RunningCondition {
            driving_end_temp: 55.5,
            driven_end_temp: 48.0,
            oil_level: OilLevel::Normal,
            abnormal_sound: Indicator::No,
            leakage: Indicator::No,
            observation: "Bearing housing clean".into(),
            vibration: VibrationInput {
                rms_velocity: 2.8,
                peak_acceleration: 0.4,
                displacement: 35.0,
            },
            gearbox: None,
        }
    }

    fn submission(condition: Option<RunningCondition>) -> NewReading {
        NewReading {
            date: date(),
            area: Area::Reaction,
            equipment: "3-P-101".into(),
            is_running: condition.is_some(),
            condition,
        }
    }

    #[test]
    fn running_submission_copies_fields() {
        let reading = submission(Some(condition())).into_reading().unwrap();
        assert!(reading.is_running);
        assert_eq!(reading.driving_end_temp, 55.5);
        assert_eq!(reading.rms_velocity, 2.8);
        assert_eq!(reading.observation, "Bearing housing clean");
        assert_eq!(reading.gearbox, GearboxReading::absent());
    }

    #[test]
    fn gearbox_fields_are_kept_when_present() {
        let mut c = condition();
        c.gearbox = Some(GearboxInput {
            temp: 61.0,
            oil_level: OilLevel::Low,
            leakage: Indicator::No,
            abnormal_sound: Indicator::Yes,
            vibration: VibrationInput {
                rms_velocity: 3.1,
                peak_acceleration: 0.9,
                displacement: 12.0,
            },
        });
        let reading = submission(Some(c)).into_reading().unwrap();
        assert_eq!(reading.gearbox.temp, 61.0);
        assert_eq!(reading.gearbox.oil_level, OilLevel::Low);
        assert_eq!(reading.gearbox.abnormal_sound, Indicator::Yes);
        assert_eq!(reading.gearbox.rms_velocity, 3.1);
    }

    #[test]
    fn stopped_submission_ignores_condition() {
        let mut s = submission(Some(condition()));
        s.is_running = false;
        let reading = s.into_reading().unwrap();
        assert!(!reading.is_running);
        assert_eq!(reading.driving_end_temp, 0.0);
        assert_eq!(reading.observation, OBSERVATION_NOT_RUNNING);
    }

    #[test]
    fn running_without_condition_is_rejected() {
        let mut s = submission(None);
        s.is_running = true;
        assert_matches!(s.into_reading(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let mut c = condition();
        c.driving_end_temp = 250.0;
        assert_matches!(submission(Some(c)).into_reading(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn out_of_range_gearbox_vibration_is_rejected() {
        let mut c = condition();
        c.gearbox = Some(GearboxInput {
            temp: 40.0,
            oil_level: OilLevel::Normal,
            leakage: Indicator::No,
            abnormal_sound: Indicator::No,
            vibration: VibrationInput {
                rms_velocity: 1.0,
                peak_acceleration: 12.0,
                displacement: 0.0,
            },
        });
        assert_matches!(submission(Some(c)).into_reading(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn equipment_outside_area_is_rejected() {
        let mut s = submission(None);
        s.area = Area::Finishing;
        assert_matches!(s.into_reading(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn sentinel_oil_level_on_running_equipment_is_rejected() {
        let mut c = condition();
        c.oil_level = OilLevel::NotApplicable;
        assert_matches!(submission(Some(c)).into_reading(), Err(CoreError::Validation(_)));
    }
}
