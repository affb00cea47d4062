//! Exercise catalog repository.

use chrono::Utc;
use rusqlite::{params, Row, ToSql};

use super::{from_millis, to_millis, GymDatabase};
use crate::domain::{Exercise, ExerciseId, ExercisePatch, NewExercise};
use crate::error::{GymError, Result};

const EXERCISE_COLUMNS: &str = "id, name, category, muscle_group, is_custom, created_at";

pub(crate) fn row_to_exercise(row: &Row) -> rusqlite::Result<Exercise> {
    let category: String = row.get(2)?;
    let muscle_group: String = row.get(3)?;
    Ok(Exercise {
        id: ExerciseId::new(row.get(0)?),
        name: row.get(1)?,
        category: category.parse().map_err(|e: GymError| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?,
        muscle_group: muscle_group.parse().map_err(|e: GymError| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?,
        is_custom: row.get(4)?,
        created_at: from_millis(row.get(5)?),
    })
}

impl GymDatabase {
    /// All catalog exercises, ordered by name.
    pub fn all_exercises(&self) -> Result<Vec<Exercise>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises ORDER BY name"
        ))?;
        let rows = stmt.query_map([], row_to_exercise)?;

        let mut exercises = Vec::new();
        for row in rows {
            exercises.push(row?);
        }
        Ok(exercises)
    }

    /// Look up one exercise. Missing ids are `Ok(None)`, never an error.
    pub fn exercise(&self, id: ExerciseId) -> Result<Option<Exercise>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE id = ?"
        ))?;
        let result = stmt.query_row(params![id.as_i64()], row_to_exercise);

        match result {
            Ok(exercise) => Ok(Some(exercise)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Case-insensitive substring search over exercise names.
    pub fn search_exercises(&self, query: &str) -> Result<Vec<Exercise>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises
             WHERE lower(name) LIKE '%' || lower(?) || '%'
             ORDER BY name"
        ))?;
        let rows = stmt.query_map(params![query], row_to_exercise)?;

        let mut exercises = Vec::new();
        for row in rows {
            exercises.push(row?);
        }
        Ok(exercises)
    }

    /// Insert a new exercise, stamping its creation time.
    pub fn create_exercise(&mut self, new: &NewExercise) -> Result<ExerciseId> {
        new.validate()?;
        self.conn.execute(
            "INSERT INTO exercises (name, category, muscle_group, is_custom, created_at)
             VALUES (?, ?, ?, ?, ?)",
            params![
                new.name,
                new.category.as_str(),
                new.muscle_group.as_str(),
                new.is_custom,
                to_millis(Utc::now())
            ],
        )?;
        Ok(ExerciseId::new(self.conn.last_insert_rowid()))
    }

    /// Merge the given fields into an existing exercise. A missing id is
    /// a silent no-op; callers must not assume existence was verified.
    pub fn update_exercise(&mut self, id: ExerciseId, patch: &ExercisePatch) -> Result<()> {
        patch.validate()?;

        let mut assignments: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(name) = &patch.name {
            assignments.push("name = ?");
            values.push(Box::new(name.clone()));
        }
        if let Some(category) = patch.category {
            assignments.push("category = ?");
            values.push(Box::new(category.as_str()));
        }
        if let Some(muscle_group) = patch.muscle_group {
            assignments.push("muscle_group = ?");
            values.push(Box::new(muscle_group.as_str()));
        }
        if let Some(is_custom) = patch.is_custom {
            assignments.push("is_custom = ?");
            values.push(Box::new(is_custom));
        }

        if assignments.is_empty() {
            return Ok(());
        }
        values.push(Box::new(id.as_i64()));

        let sql = format!(
            "UPDATE exercises SET {} WHERE id = ?",
            assignments.join(", ")
        );
        let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
        self.conn.execute(&sql, &params[..])?;
        Ok(())
    }

    /// Delete an exercise. Historical join rows referencing it are left
    /// in place; readers tolerate the dangling reference.
    pub fn delete_exercise(&mut self, id: ExerciseId) -> Result<()> {
        self.conn
            .execute("DELETE FROM exercises WHERE id = ?", params![id.as_i64()])?;
        Ok(())
    }
}
