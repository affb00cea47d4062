//! Storage layer for the workout tracker.
//!
//! A single SQLite database holds the four collections. The module is
//! organized into logical components:
//! - `schema`: database connection and schema management
//! - `models`: derived/aggregate view structures
//! - `exercises`, `workouts`, `workout_exercises`, `workout_sets`:
//!   per-entity repository operations
//! - `stats`: aggregation over the stored history
//! - `backup`: versioned snapshot export/import

pub mod backup;
pub mod models;
pub mod schema;
pub mod stats;

mod exercises;
mod workout_exercises;
mod workout_sets;
mod workouts;

#[cfg(test)]
mod tests;

pub use models::*;
pub use schema::GymDatabase;

use chrono::{DateTime, Utc};

/// Timestamps are stored as unix epoch milliseconds (INTEGER columns),
/// which keeps range queries and ORDER BY plain integer comparisons.
pub(crate) fn to_millis(dt: DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

pub(crate) fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
