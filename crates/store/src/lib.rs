//! Flat-file persistence for condition readings.
//!
//! Readings live in a single CSV file with a fixed human-readable header.
//! All operations are blocking; async callers should run them on the
//! blocking pool.

pub mod error;
pub mod record;
mod reading_store;

pub use error::StoreError;
pub use reading_store::{export_csv, ReadingStore};
