//! Computed dashboard figures and the `No Data` sentinel.

use serde::{Serialize, Serializer};

/// Sentinel reported in place of a figure when there are no readings.
pub const NO_DATA: &str = "No Data";

/// A computed percentage or temperature, or the absence of one.
///
/// Serializes as a bare number, or as the string `"No Data"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Figure {
    NoData,
    Value(f64),
}

/// Unit suffix used when formatting a [`Figure`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Celsius,
}

impl Unit {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Celsius => "°C",
        }
    }
}

impl Figure {
    /// Two decimals plus unit, e.g. `66.67%` or `42.50°C`.
    pub fn display(&self, unit: Unit) -> String {
        match self {
            Self::NoData => NO_DATA.to_string(),
            Self::Value(v) => format!("{v:.2}{}", unit.suffix()),
        }
    }
}

impl From<Option<f64>> for Figure {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::NoData, Self::Value)
    }
}

impl Serialize for Figure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NoData => serializer.serialize_str(NO_DATA),
            Self::Value(v) => serializer.serialize_f64(*v),
        }
    }
}

/// Share of items matching `predicate`, as a percentage. `None` when empty.
pub(crate) fn percentage_of<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    let hits = items.iter().filter(|item| predicate(item)).count();
    Some(hits as f64 / items.len() as f64 * 100.0)
}

/// Arithmetic mean. `None` when empty.
pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
