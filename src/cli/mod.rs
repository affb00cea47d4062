//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{ExerciseCategory, ExerciseId, MuscleGroup, WorkoutId};
use crate::settings::{AppLocale, WeightUnit};

#[derive(Parser)]
#[command(name = "gymlog", version, about = "Local workout tracker")]
pub struct GymLog {
    /// Database file to use instead of the platform default location.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert the default exercise catalog into an empty database
    Seed {
        /// Catalog language
        #[arg(long, default_value = "ru")]
        locale: AppLocale,
    },

    /// List the exercise catalog
    Exercises {
        /// Only names containing this substring (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a custom exercise to the catalog
    AddExercise {
        name: String,
        category: ExerciseCategory,
        muscle_group: MuscleGroup,
    },

    /// Remove an exercise from the catalog (history keeps its rows)
    DeleteExercise { id: ExerciseId },

    /// List logged workouts, most recent first
    Workouts,

    /// Show one workout with its exercises and sets
    Workout { id: WorkoutId },

    /// Delete a workout and everything it contains
    DeleteWorkout { id: WorkoutId },

    /// Progress statistics for one exercise
    Stats { exercise_id: ExerciseId },

    /// Monthly rollup and compound-lift progress
    Dashboard,

    /// Write the per-set CSV export
    ExportCsv {
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Write a versioned JSON backup of the whole store
    ExportBackup {
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Replace the whole store with a backup file's contents
    ImportBackup { input: PathBuf },

    /// Set the display weight unit
    SetUnit { unit: WeightUnit },
}
