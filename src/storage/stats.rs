//! Aggregation over the stored history: per-exercise statistics, the
//! dashboard rollup, and the flat CSV export.

use std::collections::{BTreeMap, HashSet};

use chrono::{NaiveDate, Utc};

use super::models::{CompoundLift, DashboardData, ExerciseStats, HistoryPoint};
use super::GymDatabase;
use crate::calc::{calculate_1rm, month_range, round1};
use crate::domain::ExerciseId;
use crate::error::Result;

/// Canonical compound-lift names tracked on the dashboard, in both
/// seed-catalog languages. Matched by exact name.
pub const COMPOUND_LIFT_NAMES: [&str; 6] = [
    "Жим лёжа",
    "Bench Press",
    "Присед",
    "Squat",
    "Становая тяга",
    "Deadlift",
];

impl GymDatabase {
    /// Aggregate the whole logged history of one exercise in a single
    /// pass. `Ok(None)` if the exercise does not exist; all-zero stats
    /// with empty history if it was never performed.
    ///
    /// Join rows whose workout has been deleted still count toward
    /// `frequency` but contribute no sets.
    pub fn exercise_stats(&self, exercise_id: ExerciseId) -> Result<Option<ExerciseStats>> {
        let Some(exercise) = self.exercise(exercise_id)? else {
            return Ok(None);
        };

        let mut personal_record: f64 = 0.0;
        let mut pr_1rm: f64 = 0.0;
        let mut total_weight: f64 = 0.0;
        let mut total_volume: f64 = 0.0;
        let mut total_sets: u32 = 0;
        let mut total_reps: u32 = 0;
        let mut weight_entries: u32 = 0;

        let mut workout_ids = HashSet::new();
        // Keyed by UTC calendar day; BTreeMap keeps history ascending.
        let mut history: BTreeMap<NaiveDate, HistoryPoint> = BTreeMap::new();

        for we in self.workout_exercises_for_exercise(exercise_id)? {
            workout_ids.insert(we.workout_id);

            let Some(workout) = self.workout(we.workout_id)? else {
                continue;
            };

            let mut day_max_weight: f64 = 0.0;
            let mut day_max_1rm: f64 = 0.0;
            let mut day_volume: f64 = 0.0;

            for set in self.sets_for(we.id)? {
                if set.weight > personal_record {
                    personal_record = set.weight;
                }
                let est_1rm = calculate_1rm(set.weight, set.reps);
                if est_1rm > pr_1rm {
                    pr_1rm = est_1rm;
                }

                if set.weight > 0.0 {
                    total_weight += set.weight;
                    weight_entries += 1;
                }
                let set_volume = set.weight * set.reps as f64;
                total_volume += set_volume;
                day_volume += set_volume;
                total_sets += 1;
                total_reps += set.reps;

                if set.weight > day_max_weight {
                    day_max_weight = set.weight;
                }
                if est_1rm > day_max_1rm {
                    day_max_1rm = est_1rm;
                }
            }

            // One entry per day; a later occurrence replaces it only when
            // it brings a strictly heavier top set.
            let day = workout.date.date_naive();
            let replace = match history.get(&day) {
                Some(existing) => day_max_weight > existing.max_weight,
                None => true,
            };
            if replace {
                history.insert(
                    day,
                    HistoryPoint {
                        date: workout.date,
                        max_weight: day_max_weight,
                        max_1rm: day_max_1rm,
                        total_volume: day_volume,
                    },
                );
            }
        }

        let avg_weight = if weight_entries > 0 {
            round1(total_weight / weight_entries as f64)
        } else {
            0.0
        };

        Ok(Some(ExerciseStats {
            exercise_id,
            exercise_name: exercise.name,
            personal_record,
            pr_1rm,
            avg_weight,
            total_volume,
            total_sets,
            total_reps,
            frequency: workout_ids.len() as u32,
            history: history.into_values().collect(),
        }))
    }

    /// Rollup for the dashboard: the most recent workout graph, this
    /// month's workout count and tonnage, and compound-lift progress.
    pub fn dashboard(&self) -> Result<DashboardData> {
        let (start, end) = month_range(Utc::now());

        let all_workouts = self.all_workouts()?;
        let last_workout = match all_workouts.first() {
            Some(w) => self.workout_with_exercises(w.id)?,
            None => None,
        };

        let month_workouts = self.workouts_between(start, end)?;
        let workouts_this_month = month_workouts.len() as u32;

        let mut tonnage: f64 = 0.0;
        for workout in &month_workouts {
            for we in self.workout_exercises(workout.id)? {
                for set in self.sets_for(we.id)? {
                    tonnage += set.weight * set.reps as f64;
                }
            }
        }

        let mut compound_lifts = Vec::new();
        for exercise in self.all_exercises()? {
            if !COMPOUND_LIFT_NAMES.contains(&exercise.name.as_str()) {
                continue;
            }
            if let Some(stats) = self.exercise_stats(exercise.id)? {
                if stats.personal_record > 0.0 {
                    compound_lifts.push(CompoundLift {
                        name: exercise.name,
                        current_max: stats.history.last().map_or(0.0, |h| h.max_weight),
                        pr: stats.personal_record,
                    });
                }
            }
        }

        Ok(DashboardData {
            last_workout,
            workouts_this_month,
            total_tonnage_this_month: tonnage.round(),
            compound_lifts,
        })
    }

    /// Flat tabular export: one row per set, workouts most recent first,
    /// join rows by display order, sets by set number. Dates are UTC
    /// calendar days.
    pub fn export_csv(&self) -> Result<String> {
        let mut lines = vec!["Date,Workout,Exercise,Set,Weight,Reps,Volume".to_string()];

        for workout in self.all_workouts()? {
            let Some(full) = self.workout_with_exercises(workout.id)? else {
                continue;
            };
            for entry in &full.exercises {
                for set in &entry.sets {
                    lines.push(format!(
                        "{},{},{},{},{},{},{}",
                        workout.date.date_naive(),
                        workout.name,
                        entry.exercise.name,
                        set.set_number,
                        set.weight,
                        set.reps,
                        set.weight * set.reps as f64
                    ));
                }
            }
        }

        Ok(lines.join("\n"))
    }
}
