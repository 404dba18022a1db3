/// Readings are recorded per calendar day, without a time component.
pub type ReadingDate = chrono::NaiveDate;

/// Plant asset tag such as `3-P-101` (area prefix, machine class, number, train).
pub type EquipmentTag = String;
