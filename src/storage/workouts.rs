//! Workout repository, including cascade delete and graph assembly.

use chrono::{DateTime, Utc};
use log::warn;
use rusqlite::{params, Row, ToSql};

use super::models::{WorkoutExerciseWithSets, WorkoutWithExercises};
use super::{from_millis, to_millis, GymDatabase};
use crate::domain::{NewWorkout, Workout, WorkoutId, WorkoutPatch};
use crate::error::Result;

const WORKOUT_COLUMNS: &str = "id, name, date, duration, notes, completed, created_at";

pub(crate) fn row_to_workout(row: &Row) -> rusqlite::Result<Workout> {
    Ok(Workout {
        id: WorkoutId::new(row.get(0)?),
        name: row.get(1)?,
        date: from_millis(row.get(2)?),
        duration: row.get(3)?,
        notes: row.get(4)?,
        completed: row.get(5)?,
        created_at: from_millis(row.get(6)?),
    })
}

impl GymDatabase {
    /// All workouts, most recent first.
    pub fn all_workouts(&self) -> Result<Vec<Workout>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts ORDER BY date DESC"
        ))?;
        let rows = stmt.query_map([], row_to_workout)?;

        let mut workouts = Vec::new();
        for row in rows {
            workouts.push(row?);
        }
        Ok(workouts)
    }

    pub fn workout(&self, id: WorkoutId) -> Result<Option<Workout>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = ?"
        ))?;
        let result = stmt.query_row(params![id.as_i64()], row_to_workout);

        match result {
            Ok(workout) => Ok(Some(workout)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Workouts whose date falls within `[start, end]`, most recent first.
    pub fn workouts_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Workout>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts
             WHERE date >= ? AND date <= ?
             ORDER BY date DESC"
        ))?;
        let rows = stmt.query_map(params![to_millis(start), to_millis(end)], row_to_workout)?;

        let mut workouts = Vec::new();
        for row in rows {
            workouts.push(row?);
        }
        Ok(workouts)
    }

    /// Assemble the full workout graph: join rows by display order, each
    /// hydrated with its exercise and its sets by set number.
    ///
    /// A join row whose exercise has since been deleted is skipped (and
    /// logged); one stale reference must not break the whole workout.
    pub fn workout_with_exercises(&self, id: WorkoutId) -> Result<Option<WorkoutWithExercises>> {
        let Some(workout) = self.workout(id)? else {
            return Ok(None);
        };

        let mut exercises = Vec::new();
        for we in self.workout_exercises(id)? {
            let Some(exercise) = self.exercise(we.exercise_id)? else {
                warn!(
                    "workout {} references deleted exercise {}; skipping entry",
                    id, we.exercise_id
                );
                continue;
            };
            let sets = self.sets_for(we.id)?;
            exercises.push(WorkoutExerciseWithSets {
                workout_exercise: we,
                exercise,
                sets,
            });
        }

        Ok(Some(WorkoutWithExercises { workout, exercises }))
    }

    pub fn create_workout(&mut self, new: &NewWorkout) -> Result<WorkoutId> {
        new.validate()?;
        self.conn.execute(
            "INSERT INTO workouts (name, date, duration, notes, completed, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                new.name,
                to_millis(new.date),
                new.duration,
                new.notes,
                new.completed,
                to_millis(Utc::now())
            ],
        )?;
        Ok(WorkoutId::new(self.conn.last_insert_rowid()))
    }

    /// Merge the given fields into an existing workout. A missing id is
    /// a silent no-op.
    pub fn update_workout(&mut self, id: WorkoutId, patch: &WorkoutPatch) -> Result<()> {
        patch.validate()?;

        let mut assignments: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(name) = &patch.name {
            assignments.push("name = ?");
            values.push(Box::new(name.clone()));
        }
        if let Some(date) = patch.date {
            assignments.push("date = ?");
            values.push(Box::new(to_millis(date)));
        }
        if let Some(duration) = patch.duration {
            assignments.push("duration = ?");
            values.push(Box::new(duration));
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

        let sql = format!("UPDATE workouts SET {} WHERE id = ?", assignments.join(", "));
        let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
        self.conn.execute(&sql, &params[..])?;
        Ok(())
    }

    /// Delete a workout together with everything it owns.
    ///
    /// Runs inside one transaction, innermost rows first, so a reader
    /// never observes a deleted workout with surviving sets and a failed
    /// step rolls the whole cascade back.
    pub fn delete_workout(&mut self, id: WorkoutId) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM workout_sets WHERE workout_exercise_id IN
                 (SELECT id FROM workout_exercises WHERE workout_id = ?)",
            params![id.as_i64()],
        )?;
        tx.execute(
            "DELETE FROM workout_exercises WHERE workout_id = ?",
            params![id.as_i64()],
        )?;
        tx.execute("DELETE FROM workouts WHERE id = ?", params![id.as_i64()])?;
        tx.commit()?;
        Ok(())
    }
}
