//! gymlog — local workout-tracking core.
//!
//! Records exercises, workouts and per-set performance in a local
//! SQLite store, and derives progress statistics from that history.
//!
//! ## Features
//!
//! - **Exercise catalog**: categorized exercises with a seedable
//!   bilingual default set
//! - **Workout log**: workouts → exercise entries → sets, with cascade
//!   deletes down the ownership chain
//! - **Progress stats**: personal records, Epley-estimated 1RM, volume
//!   and frequency, per-day history
//! - **Dashboard rollup**: monthly tonnage, last workout, compound-lift
//!   progress
//! - **Backup**: versioned JSON snapshot with destructive restore, plus
//!   a flat CSV export
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use gymlog::{GymDatabase, domain::{NewExercise, ExerciseCategory, MuscleGroup}};
//!
//! # fn example() -> gymlog::Result<()> {
//! let mut db = GymDatabase::open_default()?;
//! let id = db.create_exercise(&NewExercise {
//!     name: "Bench Press".into(),
//!     category: ExerciseCategory::Barbell,
//!     muscle_group: MuscleGroup::Chest,
//!     is_custom: true,
//! })?;
//! let stats = db.exercise_stats(id)?;
//! # Ok(())
//! # }
//! ```

pub mod calc;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod seed;
pub mod settings;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    Exercise, ExerciseId, Workout, WorkoutExercise, WorkoutExerciseId, WorkoutId, WorkoutSet,
    WorkoutSetId,
};
pub use error::{GymError, Result};
pub use storage::GymDatabase;
