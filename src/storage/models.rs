//! Derived view structures assembled from the stored collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Exercise, ExerciseId, Workout, WorkoutExercise, WorkoutSet};

/// One join row hydrated with its exercise and its sets (sorted by
/// set number).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExerciseWithSets {
    pub workout_exercise: WorkoutExercise,
    pub exercise: Exercise,
    pub sets: Vec<WorkoutSet>,
}

/// A full workout graph: the workout plus its join rows (sorted by
/// display order), each hydrated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutWithExercises {
    pub workout: Workout,
    pub exercises: Vec<WorkoutExerciseWithSets>,
}

/// Best performance on one calendar day (UTC) for a single exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub date: DateTime<Utc>,
    pub max_weight: f64,
    pub max_1rm: f64,
    pub total_volume: f64,
}

/// Aggregate statistics for one exercise across the whole history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseStats {
    pub exercise_id: ExerciseId,
    pub exercise_name: String,
    /// Heaviest weight ever logged, any rep count.
    pub personal_record: f64,
    /// Best Epley-estimated one-rep max across all sets.
    pub pr_1rm: f64,
    /// Mean of all set weights strictly above zero, 1 decimal.
    pub avg_weight: f64,
    pub total_volume: f64,
    pub total_sets: u32,
    pub total_reps: u32,
    /// Number of distinct workouts that included this exercise.
    pub frequency: u32,
    pub history: Vec<HistoryPoint>,
}

/// Progress snapshot for one canonical compound lift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundLift {
    pub name: String,
    /// Max weight on the most recent history day.
    pub current_max: f64,
    /// All-time personal record.
    pub pr: f64,
}

/// Rollup shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub last_workout: Option<WorkoutWithExercises>,
    pub workouts_this_month: u32,
    pub total_tonnage_this_month: f64,
    pub compound_lifts: Vec<CompoundLift>,
}
