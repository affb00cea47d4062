//! Repository for workout↔exercise join rows.

use chrono::Utc;
use rusqlite::{params, Row};

use super::{from_millis, to_millis, GymDatabase};
use crate::domain::{
    ExerciseId, NewWorkoutExercise, WorkoutExercise, WorkoutExerciseId, WorkoutId,
};
use crate::error::Result;

const JOIN_COLUMNS: &str = "id, workout_id, exercise_id, sort_order, created_at";

pub(crate) fn row_to_workout_exercise(row: &Row) -> rusqlite::Result<WorkoutExercise> {
    Ok(WorkoutExercise {
        id: WorkoutExerciseId::new(row.get(0)?),
        workout_id: WorkoutId::new(row.get(1)?),
        exercise_id: ExerciseId::new(row.get(2)?),
        order: row.get(3)?,
        created_at: from_millis(row.get(4)?),
    })
}

impl GymDatabase {
    /// Join rows of one workout, sorted by display order.
    pub fn workout_exercises(&self, workout_id: WorkoutId) -> Result<Vec<WorkoutExercise>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {JOIN_COLUMNS} FROM workout_exercises
             WHERE workout_id = ? ORDER BY sort_order"
        ))?;
        let rows = stmt.query_map(params![workout_id.as_i64()], row_to_workout_exercise)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// All join rows referencing one exercise, across every workout.
    pub(crate) fn workout_exercises_for_exercise(
        &self,
        exercise_id: ExerciseId,
    ) -> Result<Vec<WorkoutExercise>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {JOIN_COLUMNS} FROM workout_exercises WHERE exercise_id = ?"
        ))?;
        let rows = stmt.query_map(params![exercise_id.as_i64()], row_to_workout_exercise)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    pub fn create_workout_exercise(
        &mut self,
        new: &NewWorkoutExercise,
    ) -> Result<WorkoutExerciseId> {
        self.conn.execute(
            "INSERT INTO workout_exercises (workout_id, exercise_id, sort_order, created_at)
             VALUES (?, ?, ?, ?)",
            params![
                new.workout_id.as_i64(),
                new.exercise_id.as_i64(),
                new.order,
                to_millis(Utc::now())
            ],
        )?;
        Ok(WorkoutExerciseId::new(self.conn.last_insert_rowid()))
    }

    /// Move a join row to a new display position. Missing id is a
    /// silent no-op.
    pub fn set_workout_exercise_order(&mut self, id: WorkoutExerciseId, order: u32) -> Result<()> {
        self.conn.execute(
            "UPDATE workout_exercises SET sort_order = ? WHERE id = ?",
            params![order, id.as_i64()],
        )?;
        Ok(())
    }

    /// Delete a join row and the sets it owns, atomically.
    pub fn delete_workout_exercise(&mut self, id: WorkoutExerciseId) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM workout_sets WHERE workout_exercise_id = ?",
            params![id.as_i64()],
        )?;
        tx.execute(
            "DELETE FROM workout_exercises WHERE id = ?",
            params![id.as_i64()],
        )?;
        tx.commit()?;
        Ok(())
    }
}
