//! Shared query parameter types for API handlers.

use chrono::Days;
use condmon_core::types::{EquipmentTag, ReadingDate};
use serde::Deserialize;

/// Optional inclusive date window (`?start=&end=`, ISO dates).
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeParams {
    pub start: Option<ReadingDate>,
    pub end: Option<ReadingDate>,
}

impl DateRangeParams {
    /// The window, unbounded on any side that was not given.
    pub fn bounds(&self) -> (ReadingDate, ReadingDate) {
        (
            self.start.unwrap_or(ReadingDate::MIN),
            self.end.unwrap_or(ReadingDate::MAX),
        )
    }

    /// The window, defaulting to the `days` days before `today`.
    ///
    /// A missing end defaults to `today`; a missing start to `days` before
    /// the end.
    pub fn trailing(&self, today: ReadingDate, days: u64) -> (ReadingDate, ReadingDate) {
        let end = self.end.unwrap_or(today);
        let start = self.start.unwrap_or_else(|| {
            end.checked_sub_days(Days::new(days))
                .unwrap_or(ReadingDate::MIN)
        });
        (start, end)
    }
}

/// Equipment and date window filter (`?equipment=&start=&end=`).
#[derive(Debug, Default, Deserialize)]
pub struct ReadingFilterParams {
    pub equipment: Option<EquipmentTag>,
    pub start: Option<ReadingDate>,
    pub end: Option<ReadingDate>,
}

impl ReadingFilterParams {
    pub fn range(&self) -> DateRangeParams {
        DateRangeParams {
            start: self.start,
            end: self.end,
        }
    }
}
