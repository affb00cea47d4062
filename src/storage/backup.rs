//! Versioned whole-store snapshot: JSON export and destructive restore.

use chrono::{DateTime, Utc};
use rusqlite::params;
use serde::{Deserialize, Serialize};

use super::{exercises, to_millis, workout_exercises, workout_sets, workouts, GymDatabase};
use crate::domain::{Exercise, Workout, WorkoutExercise, WorkoutSet};
use crate::error::{GymError, Result};

/// The single backup format version this build reads and writes.
pub const BACKUP_VERSION: u32 = 1;

/// Interchange payload: every raw record of the four collections,
/// verbatim. Ids serialize as strings and dates as RFC 3339, so backups
/// are portable across the id/date representation of the store.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPayload {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub exercises: Vec<Exercise>,
    pub workouts: Vec<Workout>,
    pub workout_exercises: Vec<WorkoutExercise>,
    pub workout_sets: Vec<WorkoutSet>,
}

/// Minimal probe so a wrong version fails as such, not as a shape error.
#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl GymDatabase {
    /// Serialize the entire store to the versioned interchange format.
    pub fn export_backup(&self) -> Result<String> {
        let payload = BackupPayload {
            version: BACKUP_VERSION,
            exported_at: Utc::now(),
            exercises: self.dump_exercises()?,
            workouts: self.dump_workouts()?,
            workout_exercises: self.dump_workout_exercises()?,
            workout_sets: self.dump_workout_sets()?,
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Destructive full-replace restore.
    ///
    /// Fails fast on an unsupported version, before any write. The clear
    /// and re-insert of all four collections run in one transaction, so
    /// a reader never observes a partially imported store and a failure
    /// leaves the previous contents intact.
    pub fn import_backup(&mut self, json: &str) -> Result<()> {
        let probe: VersionProbe = serde_json::from_str(json)?;
        if probe.version != BACKUP_VERSION {
            return Err(GymError::UnsupportedBackupVersion {
                found: probe.version,
            });
        }
        let payload: BackupPayload = serde_json::from_str(json)?;

        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM workout_sets", [])?;
        tx.execute("DELETE FROM workout_exercises", [])?;
        tx.execute("DELETE FROM workouts", [])?;
        tx.execute("DELETE FROM exercises", [])?;

        for e in &payload.exercises {
            tx.execute(
                "INSERT INTO exercises (id, name, category, muscle_group, is_custom, created_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
                params![
                    e.id.as_i64(),
                    e.name,
                    e.category.as_str(),
                    e.muscle_group.as_str(),
                    e.is_custom,
                    to_millis(e.created_at)
                ],
            )?;
        }
        for w in &payload.workouts {
            tx.execute(
                "INSERT INTO workouts (id, name, date, duration, notes, completed, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
                params![
                    w.id.as_i64(),
                    w.name,
                    to_millis(w.date),
                    w.duration,
                    w.notes,
                    w.completed,
                    to_millis(w.created_at)
                ],
            )?;
        }
        for we in &payload.workout_exercises {
            tx.execute(
                "INSERT INTO workout_exercises (id, workout_id, exercise_id, sort_order, created_at)
                 VALUES (?, ?, ?, ?, ?)",
                params![
                    we.id.as_i64(),
                    we.workout_id.as_i64(),
                    we.exercise_id.as_i64(),
                    we.order,
                    to_millis(we.created_at)
                ],
            )?;
        }
        for s in &payload.workout_sets {
            tx.execute(
                "INSERT INTO workout_sets
                     (id, workout_exercise_id, set_number, weight, reps, notes, completed, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    s.id.as_i64(),
                    s.workout_exercise_id.as_i64(),
                    s.set_number,
                    s.weight,
                    s.reps,
                    s.notes,
                    s.completed,
                    to_millis(s.created_at)
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    // Raw dumps in id order, independent of the display orderings the
    // repository queries apply.

    fn dump_exercises(&self) -> Result<Vec<Exercise>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category, muscle_group, is_custom, created_at
             FROM exercises ORDER BY id",
        )?;
        let rows = stmt.query_map([], exercises::row_to_exercise)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn dump_workouts(&self) -> Result<Vec<Workout>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, date, duration, notes, completed, created_at
             FROM workouts ORDER BY id",
        )?;
        let rows = stmt.query_map([], workouts::row_to_workout)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn dump_workout_exercises(&self) -> Result<Vec<WorkoutExercise>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, workout_id, exercise_id, sort_order, created_at
             FROM workout_exercises ORDER BY id",
        )?;
        let rows = stmt.query_map([], workout_exercises::row_to_workout_exercise)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn dump_workout_sets(&self) -> Result<Vec<WorkoutSet>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, workout_exercise_id, set_number, weight, reps, notes, completed, created_at
             FROM workout_sets ORDER BY id",
        )?;
        let rows = stmt.query_map([], workout_sets::row_to_set)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}
