//! Repository for performed sets.

use chrono::Utc;
use rusqlite::{params, Row, ToSql};

use super::{from_millis, to_millis, GymDatabase};
use crate::domain::{NewWorkoutSet, WorkoutExerciseId, WorkoutSet, WorkoutSetId, WorkoutSetPatch};
use crate::error::Result;

const SET_COLUMNS: &str =
    "id, workout_exercise_id, set_number, weight, reps, notes, completed, created_at";

pub(crate) fn row_to_set(row: &Row) -> rusqlite::Result<WorkoutSet> {
    Ok(WorkoutSet {
        id: WorkoutSetId::new(row.get(0)?),
        workout_exercise_id: WorkoutExerciseId::new(row.get(1)?),
        set_number: row.get(2)?,
        weight: row.get(3)?,
        reps: row.get(4)?,
        notes: row.get(5)?,
        completed: row.get(6)?,
        created_at: from_millis(row.get(7)?),
    })
}

impl GymDatabase {
    /// Sets owned by one join row, sorted by set number.
    pub fn sets_for(&self, workout_exercise_id: WorkoutExerciseId) -> Result<Vec<WorkoutSet>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SET_COLUMNS} FROM workout_sets
             WHERE workout_exercise_id = ? ORDER BY set_number"
        ))?;
        let rows = stmt.query_map(params![workout_exercise_id.as_i64()], row_to_set)?;

        let mut sets = Vec::new();
        for row in rows {
            sets.push(row?);
        }
        Ok(sets)
    }

    pub fn create_set(&mut self, new: &NewWorkoutSet) -> Result<WorkoutSetId> {
        new.validate()?;
        self.conn.execute(
            "INSERT INTO workout_sets
                 (workout_exercise_id, set_number, weight, reps, notes, completed, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                new.workout_exercise_id.as_i64(),
                new.set_number,
                new.weight,
                new.reps,
                new.notes,
                new.completed,
                to_millis(Utc::now())
            ],
        )?;
        Ok(WorkoutSetId::new(self.conn.last_insert_rowid()))
    }

    /// Merge the given fields into an existing set. A missing id is a
    /// silent no-op.
    pub fn update_set(&mut self, id: WorkoutSetId, patch: &WorkoutSetPatch) -> Result<()> {
        patch.validate()?;

        let mut assignments: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(set_number) = patch.set_number {
            assignments.push("set_number = ?");
            values.push(Box::new(set_number));
        }
        if let Some(weight) = patch.weight {
            assignments.push("weight = ?");
            values.push(Box::new(weight));
        }
        if let Some(reps) = patch.reps {
            assignments.push("reps = ?");
            values.push(Box::new(reps));
        }
        if let Some(notes) = &patch.notes {
            assignments.push("notes = ?");
            values.push(Box::new(notes.clone()));
        }
        if let Some(completed) = patch.completed {
            assignments.push("completed = ?");
            values.push(Box::new(completed));
        }

        if assignments.is_empty() {
            return Ok(());
        }
        values.push(Box::new(id.as_i64()));

        let sql = format!(
            "UPDATE workout_sets SET {} WHERE id = ?",
            assignments.join(", ")
        );
        let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
        self.conn.execute(&sql, &params[..])?;
        Ok(())
    }

    pub fn delete_set(&mut self, id: WorkoutSetId) -> Result<()> {
        self.conn.execute(
            "DELETE FROM workout_sets WHERE id = ?",
            params![id.as_i64()],
        )?;
        Ok(())
    }
}
