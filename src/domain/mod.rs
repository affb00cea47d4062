//! Entity shapes and validation rules for the stored collections.
//!
//! Each entity comes in three shapes, following the insert/patch split
//! of the storage layer:
//! - the full record (`Exercise`, `Workout`, ...), always carrying an id
//!   and a creation timestamp;
//! - a `New*` struct for inserts, without id/timestamp (stamped by the
//!   repository at creation);
//! - a `*Patch` struct of optional fields for partial updates, where
//!   `None` leaves the column unchanged.

pub mod ids;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GymError, Result};

pub use ids::{ExerciseId, WorkoutExerciseId, WorkoutId, WorkoutSetId};

/// Equipment category of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Barbell,
    Dumbbell,
    Machine,
    Cable,
    Bodyweight,
    Other,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Barbell => "barbell",
            Self::Dumbbell => "dumbbell",
            Self::Machine => "machine",
            Self::Cable => "cable",
            Self::Bodyweight => "bodyweight",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExerciseCategory {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "barbell" => Ok(Self::Barbell),
            "dumbbell" => Ok(Self::Dumbbell),
            "machine" => Ok(Self::Machine),
            "cable" => Ok(Self::Cable),
            "bodyweight" => Ok(Self::Bodyweight),
            "other" => Ok(Self::Other),
            other => Err(GymError::validation(format!(
                "unrecognized exercise category: {other:?}"
            ))),
        }
    }
}

/// Primary muscle group targeted by an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Glutes,
    Core,
    Forearms,
    Calves,
    FullBody,
}

impl MuscleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Legs => "legs",
            Self::Glutes => "glutes",
            Self::Core => "core",
            Self::Forearms => "forearms",
            Self::Calves => "calves",
            Self::FullBody => "full_body",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "chest" => Ok(Self::Chest),
            "back" => Ok(Self::Back),
            "shoulders" => Ok(Self::Shoulders),
            "biceps" => Ok(Self::Biceps),
            "triceps" => Ok(Self::Triceps),
            "legs" => Ok(Self::Legs),
            "glutes" => Ok(Self::Glutes),
            "core" => Ok(Self::Core),
            "forearms" => Ok(Self::Forearms),
            "calves" => Ok(Self::Calves),
            "full_body" | "fullbody" => Ok(Self::FullBody),
            other => Err(GymError::validation(format!(
                "unrecognized muscle group: {other:?}"
            ))),
        }
    }
}

/// A catalog exercise. Shared by reference from workout join rows and
/// never owned by them: deleting an exercise leaves historical rows
/// pointing at a missing id, which readers must tolerate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub category: ExerciseCategory,
    pub muscle_group: MuscleGroup,
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewExercise {
    pub name: String,
    pub category: ExerciseCategory,
    pub muscle_group: MuscleGroup,
    pub is_custom: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub category: Option<ExerciseCategory>,
    pub muscle_group: Option<MuscleGroup>,
    pub is_custom: Option<bool>,
}

/// One logged training session. Owns its join rows and, through them,
/// their sets; deletion cascades over both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: WorkoutId,
    pub name: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub name: String,
    pub date: DateTime<Utc>,
    pub duration: Option<u32>,
    pub notes: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct WorkoutPatch {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub duration: Option<u32>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

/// Join row binding an exercise into a workout, with a display position.
/// `order` is a strict sort key within the workout but need not be
/// contiguous.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: WorkoutExerciseId,
    pub workout_id: WorkoutId,
    pub exercise_id: ExerciseId,
    pub order: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewWorkoutExercise {
    pub workout_id: WorkoutId,
    pub exercise_id: ExerciseId,
    pub order: u32,
}

/// One performed set. `set_number` is a display/sort key starting at 1;
/// the store does not force it unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    pub id: WorkoutSetId,
    pub workout_exercise_id: WorkoutExerciseId,
    pub set_number: u32,
    pub weight: f64,
    pub reps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewWorkoutSet {
    pub workout_exercise_id: WorkoutExerciseId,
    pub set_number: u32,
    pub weight: f64,
    pub reps: u32,
    pub notes: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct WorkoutSetPatch {
    pub set_number: Option<u32>,
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

// Validation boundary: malformed data is rejected here, before any row
// reaches the store.

fn require_name(name: &str, entity: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GymError::validation(format!("{entity} name must not be empty")));
    }
    Ok(())
}

fn require_weight(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(GymError::validation(format!(
            "weight must be a non-negative number, got {weight}"
        )));
    }
    Ok(())
}

fn require_set_number(set_number: u32) -> Result<()> {
    if set_number < 1 {
        return Err(GymError::validation("set number must be at least 1"));
    }
    Ok(())
}

impl NewExercise {
    pub fn validate(&self) -> Result<()> {
        require_name(&self.name, "exercise")
    }
}

impl ExercisePatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_name(name, "exercise")?;
        }
        Ok(())
    }
}

impl NewWorkout {
    pub fn validate(&self) -> Result<()> {
        require_name(&self.name, "workout")
    }
}

impl WorkoutPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_name(name, "workout")?;
        }
        Ok(())
    }
}

impl NewWorkoutSet {
    pub fn validate(&self) -> Result<()> {
        require_weight(self.weight)?;
        require_set_number(self.set_number)
    }
}

impl WorkoutSetPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(weight) = self.weight {
            require_weight(weight)?;
        }
        if let Some(set_number) = self.set_number {
            require_set_number(set_number)?;
        }
        Ok(())
    }
}
