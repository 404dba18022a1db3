//! Condition monitoring domain logic.
//!
//! Pure computations over equipment readings: plant roster, submission
//! validation, KPI and compliance aggregates, deviation evaluation,
//! recommendations and chart series. No I/O lives here; the store and API
//! crates feed readings in and serialize the results.

pub mod compliance;
pub mod deviation;
pub mod error;
pub mod figure;
pub mod filter;
pub mod kpi;
pub mod navigation;
pub mod reading;
pub mod recommendation;
pub mod roster;
pub mod submission;
pub mod thresholds;
pub mod trends;
pub mod types;
