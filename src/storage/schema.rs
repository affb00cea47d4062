//! Database connection and schema management.

use std::path::{Path, PathBuf};

use dirs::data_dir;
use log::debug;
use rusqlite::Connection;

use crate::error::{GymError, Result};

/// Connection manager for the workout database.
///
/// Explicitly constructed and passed to callers; dropping it closes the
/// connection. There is no shared global handle.
pub struct GymDatabase {
    pub(crate) conn: Connection,
}

impl GymDatabase {
    /// Open (or create) the database at the platform data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(Self::database_path()?)
    }

    /// Open (or create) the database at an explicit path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open an in-memory database. Used by tests and throwaway sessions.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default on-disk location of the database file.
    pub fn database_path() -> Result<PathBuf> {
        let base = data_dir().ok_or(GymError::MissingBaseDir("data"))?;
        Ok(base.join("gymlog").join("gymlog.db"))
    }

    /// Create tables and secondary indexes if they do not exist yet.
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        debug!("initializing database schema");

        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                muscle_group TEXT NOT NULL,
                is_custom INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                date INTEGER NOT NULL,
                duration INTEGER,
                notes TEXT,
                completed INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS workout_exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                workout_id INTEGER NOT NULL,
                exercise_id INTEGER NOT NULL,
                sort_order INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS workout_sets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                workout_exercise_id INTEGER NOT NULL,
                set_number INTEGER NOT NULL,
                weight REAL NOT NULL,
                reps INTEGER NOT NULL,
                notes TEXT,
                completed INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_exercises_name
                ON exercises(name);
            CREATE INDEX IF NOT EXISTS idx_exercises_category
                ON exercises(category);
            CREATE INDEX IF NOT EXISTS idx_exercises_muscle_group
                ON exercises(muscle_group);
            CREATE INDEX IF NOT EXISTS idx_exercises_created_at
                ON exercises(created_at);

            CREATE INDEX IF NOT EXISTS idx_workouts_date
                ON workouts(date);
            CREATE INDEX IF NOT EXISTS idx_workouts_completed
                ON workouts(completed);
            CREATE INDEX IF NOT EXISTS idx_workouts_created_at
                ON workouts(created_at);

            CREATE INDEX IF NOT EXISTS idx_workout_exercises_workout
                ON workout_exercises(workout_id, sort_order);
            CREATE INDEX IF NOT EXISTS idx_workout_exercises_exercise
                ON workout_exercises(exercise_id);
            CREATE INDEX IF NOT EXISTS idx_workout_exercises_created_at
                ON workout_exercises(created_at);

            CREATE INDEX IF NOT EXISTS idx_workout_sets_owner
                ON workout_sets(workout_exercise_id, set_number);
            CREATE INDEX IF NOT EXISTS idx_workout_sets_created_at
                ON workout_sets(created_at);",
        )?;

        Ok(())
    }
}
