//! Unit tests for the storage layer, over an in-memory database.

use chrono::{TimeZone, Utc};

use super::GymDatabase;
use crate::domain::{
    ExerciseCategory, ExerciseId, ExercisePatch, MuscleGroup, NewExercise, NewWorkout,
    NewWorkoutExercise, NewWorkoutSet, WorkoutExerciseId, WorkoutId, WorkoutPatch,
    WorkoutSetPatch,
};
use crate::error::GymError;

fn create_test_db() -> GymDatabase {
    GymDatabase::open_in_memory().unwrap()
}

fn add_exercise(db: &mut GymDatabase, name: &str) -> ExerciseId {
    db.create_exercise(&NewExercise {
        name: name.to_string(),
        category: ExerciseCategory::Barbell,
        muscle_group: MuscleGroup::Chest,
        is_custom: true,
    })
    .unwrap()
}

fn add_workout_on(db: &mut GymDatabase, name: &str, y: i32, m: u32, d: u32) -> WorkoutId {
    db.create_workout(&NewWorkout {
        name: name.to_string(),
        date: Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap(),
        duration: Some(60),
        notes: None,
        completed: true,
    })
    .unwrap()
}

fn add_entry(
    db: &mut GymDatabase,
    workout_id: WorkoutId,
    exercise_id: ExerciseId,
    order: u32,
) -> WorkoutExerciseId {
    db.create_workout_exercise(&NewWorkoutExercise {
        workout_id,
        exercise_id,
        order,
    })
    .unwrap()
}

fn add_set(db: &mut GymDatabase, owner: WorkoutExerciseId, n: u32, weight: f64, reps: u32) {
    db.create_set(&NewWorkoutSet {
        workout_exercise_id: owner,
        set_number: n,
        weight,
        reps,
        notes: None,
        completed: true,
    })
    .unwrap();
}

#[test]
fn exercise_create_and_get_round_trips() {
    let mut db = create_test_db();
    let id = add_exercise(&mut db, "Bench Press");

    let exercise = db.exercise(id).unwrap().unwrap();
    assert_eq!(exercise.id, id);
    assert_eq!(exercise.name, "Bench Press");
    assert_eq!(exercise.category, ExerciseCategory::Barbell);
    assert_eq!(exercise.muscle_group, MuscleGroup::Chest);
    assert!(exercise.is_custom);
}

#[test]
fn missing_exercise_is_none_not_error() {
    let db = create_test_db();
    assert!(db.exercise(ExerciseId::new(999)).unwrap().is_none());
}

#[test]
fn all_exercises_is_ordered_by_name() {
    let mut db = create_test_db();
    add_exercise(&mut db, "Squat");
    add_exercise(&mut db, "Bench Press");
    add_exercise(&mut db, "Deadlift");

    let names: Vec<String> = db
        .all_exercises()
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, ["Bench Press", "Deadlift", "Squat"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let mut db = create_test_db();
    add_exercise(&mut db, "Bench Press");
    add_exercise(&mut db, "Leg Press");
    add_exercise(&mut db, "Squat");

    let hits = db.search_exercises("press").unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|e| e.name.contains("Press")));
}

#[test]
fn exercise_update_merges_only_given_fields() {
    let mut db = create_test_db();
    let id = add_exercise(&mut db, "Bench Press");

    db.update_exercise(
        id,
        &ExercisePatch {
            muscle_group: Some(MuscleGroup::Triceps),
            ..Default::default()
        },
    )
    .unwrap();

    let exercise = db.exercise(id).unwrap().unwrap();
    assert_eq!(exercise.name, "Bench Press");
    assert_eq!(exercise.muscle_group, MuscleGroup::Triceps);
}

#[test]
fn update_on_missing_id_is_a_silent_noop() {
    let mut db = create_test_db();
    let patch = ExercisePatch {
        name: Some("Ghost".into()),
        ..Default::default()
    };
    assert!(db.update_exercise(ExerciseId::new(123), &patch).is_ok());
}

#[test]
fn invalid_entity_data_never_reaches_the_store() {
    let mut db = create_test_db();
    let result = db.create_exercise(&NewExercise {
        name: "".into(),
        category: ExerciseCategory::Other,
        muscle_group: MuscleGroup::Core,
        is_custom: true,
    });
    assert!(matches!(result, Err(GymError::Validation { .. })));
    assert!(db.all_exercises().unwrap().is_empty());
}

#[test]
fn workouts_are_listed_most_recent_first() {
    let mut db = create_test_db();
    add_workout_on(&mut db, "Old", 2024, 1, 5);
    add_workout_on(&mut db, "New", 2024, 3, 5);
    add_workout_on(&mut db, "Mid", 2024, 2, 5);

    let names: Vec<String> = db
        .all_workouts()
        .unwrap()
        .into_iter()
        .map(|w| w.name)
        .collect();
    assert_eq!(names, ["New", "Mid", "Old"]);
}

#[test]
fn date_range_bounds_are_inclusive() {
    let mut db = create_test_db();
    let w = add_workout_on(&mut db, "Edge", 2024, 1, 5);
    add_workout_on(&mut db, "Outside", 2024, 2, 1);

    let start = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
    let hits = db.workouts_between(start, end).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, w);
}

#[test]
fn workout_update_merges_fields() {
    let mut db = create_test_db();
    let id = add_workout_on(&mut db, "Push Day", 2024, 1, 5);

    db.update_workout(
        id,
        &WorkoutPatch {
            notes: Some("felt strong".into()),
            completed: Some(false),
            ..Default::default()
        },
    )
    .unwrap();

    let workout = db.workout(id).unwrap().unwrap();
    assert_eq!(workout.name, "Push Day");
    assert_eq!(workout.notes.as_deref(), Some("felt strong"));
    assert!(!workout.completed);
}

#[test]
fn graph_is_sorted_by_order_and_set_number() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    let squat = add_exercise(&mut db, "Squat");
    let w = add_workout_on(&mut db, "Full Body", 2024, 1, 5);

    // Insert out of order on purpose.
    let second = add_entry(&mut db, w, squat, 1);
    let first = add_entry(&mut db, w, bench, 0);
    add_set(&mut db, first, 2, 100.0, 5);
    add_set(&mut db, first, 1, 95.0, 5);
    add_set(&mut db, second, 1, 140.0, 3);

    let full = db.workout_with_exercises(w).unwrap().unwrap();
    assert_eq!(full.exercises.len(), 2);
    assert_eq!(full.exercises[0].exercise.name, "Bench Press");
    assert_eq!(full.exercises[1].exercise.name, "Squat");

    let set_numbers: Vec<u32> = full.exercises[0].sets.iter().map(|s| s.set_number).collect();
    assert_eq!(set_numbers, [1, 2]);
}

#[test]
fn graph_of_missing_workout_is_none() {
    let db = create_test_db();
    assert!(db
        .workout_with_exercises(WorkoutId::new(5))
        .unwrap()
        .is_none());
}

#[test]
fn graph_skips_entries_whose_exercise_was_deleted() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    let squat = add_exercise(&mut db, "Squat");
    let w = add_workout_on(&mut db, "Day", 2024, 1, 5);
    add_entry(&mut db, w, bench, 0);
    add_entry(&mut db, w, squat, 1);

    db.delete_exercise(bench).unwrap();

    let full = db.workout_with_exercises(w).unwrap().unwrap();
    assert_eq!(full.exercises.len(), 1);
    assert_eq!(full.exercises[0].exercise.name, "Squat");
}

#[test]
fn deleting_a_workout_cascades_to_entries_and_sets() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    let w = add_workout_on(&mut db, "Push", 2024, 1, 5);
    let entry = add_entry(&mut db, w, bench, 0);
    add_set(&mut db, entry, 1, 100.0, 5);
    add_set(&mut db, entry, 2, 100.0, 5);

    db.delete_workout(w).unwrap();

    assert!(db.workout_with_exercises(w).unwrap().is_none());
    assert!(db.workout_exercises(w).unwrap().is_empty());
    assert!(db.sets_for(entry).unwrap().is_empty());
    // The shared exercise survives.
    assert!(db.exercise(bench).unwrap().is_some());
}

#[test]
fn deleting_an_entry_cascades_to_its_sets_only() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    let w = add_workout_on(&mut db, "Push", 2024, 1, 5);
    let keep = add_entry(&mut db, w, bench, 0);
    let gone = add_entry(&mut db, w, bench, 1);
    add_set(&mut db, keep, 1, 80.0, 8);
    add_set(&mut db, gone, 1, 90.0, 6);

    db.delete_workout_exercise(gone).unwrap();

    assert_eq!(db.workout_exercises(w).unwrap().len(), 1);
    assert!(db.sets_for(gone).unwrap().is_empty());
    assert_eq!(db.sets_for(keep).unwrap().len(), 1);
}

#[test]
fn entry_order_can_be_moved() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    let squat = add_exercise(&mut db, "Squat");
    let w = add_workout_on(&mut db, "Day", 2024, 1, 5);
    let first = add_entry(&mut db, w, bench, 0);
    add_entry(&mut db, w, squat, 1);

    db.set_workout_exercise_order(first, 5).unwrap();

    let entries = db.workout_exercises(w).unwrap();
    assert_eq!(entries[0].exercise_id, squat);
    assert_eq!(entries[1].exercise_id, bench);
    assert_eq!(entries[1].order, 5);
}

#[test]
fn set_update_merges_fields() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    let w = add_workout_on(&mut db, "Push", 2024, 1, 5);
    let entry = add_entry(&mut db, w, bench, 0);
    add_set(&mut db, entry, 1, 100.0, 5);
    let set_id = db.sets_for(entry).unwrap()[0].id;

    db.update_set(
        set_id,
        &WorkoutSetPatch {
            weight: Some(102.5),
            ..Default::default()
        },
    )
    .unwrap();

    let set = &db.sets_for(entry).unwrap()[0];
    assert_eq!(set.weight, 102.5);
    assert_eq!(set.reps, 5);
}

// ── Stats ──────────────────────────────────────────────────────────

#[test]
fn stats_for_missing_exercise_is_none() {
    let db = create_test_db();
    assert!(db.exercise_stats(ExerciseId::new(9)).unwrap().is_none());
}

#[test]
fn stats_with_no_logged_sets_are_all_zero() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");

    let stats = db.exercise_stats(bench).unwrap().unwrap();
    assert_eq!(stats.personal_record, 0.0);
    assert_eq!(stats.pr_1rm, 0.0);
    assert_eq!(stats.avg_weight, 0.0);
    assert_eq!(stats.total_volume, 0.0);
    assert_eq!(stats.total_sets, 0);
    assert_eq!(stats.total_reps, 0);
    assert_eq!(stats.frequency, 0);
    assert!(stats.history.is_empty());
}

#[test]
fn stats_aggregate_a_simple_workout() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    let w = add_workout_on(&mut db, "W1", 2024, 1, 5);
    let entry = add_entry(&mut db, w, bench, 0);
    add_set(&mut db, entry, 1, 100.0, 5);
    add_set(&mut db, entry, 2, 100.0, 5);

    let stats = db.exercise_stats(bench).unwrap().unwrap();
    assert_eq!(stats.personal_record, 100.0);
    assert_eq!(stats.pr_1rm, 116.7);
    assert_eq!(stats.avg_weight, 100.0);
    assert_eq!(stats.total_volume, 1000.0);
    assert_eq!(stats.total_sets, 2);
    assert_eq!(stats.total_reps, 10);
    assert_eq!(stats.frequency, 1);

    assert_eq!(stats.history.len(), 1);
    let day = &stats.history[0];
    assert_eq!(day.date.date_naive().to_string(), "2024-01-05");
    assert_eq!(day.max_weight, 100.0);
    assert_eq!(day.max_1rm, 116.7);
    assert_eq!(day.total_volume, 1000.0);
}

#[test]
fn avg_weight_ignores_bodyweight_sets() {
    let mut db = create_test_db();
    let pullup = add_exercise(&mut db, "Pull-up");
    let w = add_workout_on(&mut db, "Back", 2024, 1, 5);
    let entry = add_entry(&mut db, w, pullup, 0);
    add_set(&mut db, entry, 1, 0.0, 10);
    add_set(&mut db, entry, 2, 20.0, 5);

    let stats = db.exercise_stats(pullup).unwrap().unwrap();
    assert_eq!(stats.avg_weight, 20.0);
    assert_eq!(stats.total_sets, 2);
}

#[test]
fn history_keeps_the_heavier_entry_for_a_repeated_day() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");

    let morning = add_workout_on(&mut db, "AM", 2024, 1, 5);
    let evening = add_workout_on(&mut db, "PM", 2024, 1, 5);
    let am_entry = add_entry(&mut db, morning, bench, 0);
    let pm_entry = add_entry(&mut db, evening, bench, 0);
    add_set(&mut db, am_entry, 1, 100.0, 5);
    add_set(&mut db, pm_entry, 1, 90.0, 5);

    let stats = db.exercise_stats(bench).unwrap().unwrap();
    assert_eq!(stats.frequency, 2);
    assert_eq!(stats.history.len(), 1);
    assert_eq!(stats.history[0].max_weight, 100.0);
}

#[test]
fn history_is_sorted_ascending_by_day() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    for (day, weight) in [(20, 105.0), (5, 100.0), (12, 102.5)] {
        let w = add_workout_on(&mut db, "W", 2024, 1, day);
        let entry = add_entry(&mut db, w, bench, 0);
        add_set(&mut db, entry, 1, weight, 5);
    }

    let stats = db.exercise_stats(bench).unwrap().unwrap();
    let days: Vec<String> = stats
        .history
        .iter()
        .map(|h| h.date.date_naive().to_string())
        .collect();
    assert_eq!(days, ["2024-01-05", "2024-01-12", "2024-01-20"]);
}

#[test]
fn stats_skip_entries_whose_workout_is_gone_but_count_frequency() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    let w = add_workout_on(&mut db, "W", 2024, 1, 5);
    let entry = add_entry(&mut db, w, bench, 0);
    add_set(&mut db, entry, 1, 100.0, 5);

    // Remove the workout row only, leaving the join row dangling.
    db.conn
        .execute("DELETE FROM workouts WHERE id = ?", [w.as_i64()])
        .unwrap();

    let stats = db.exercise_stats(bench).unwrap().unwrap();
    assert_eq!(stats.total_sets, 0);
    assert!(stats.history.is_empty());
    assert_eq!(stats.frequency, 1);
}

// ── CSV export ─────────────────────────────────────────────────────

#[test]
fn csv_has_header_and_one_row_per_set() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    let w = add_workout_on(&mut db, "W1", 2024, 1, 5);
    let entry = add_entry(&mut db, w, bench, 0);
    add_set(&mut db, entry, 1, 100.0, 5);
    add_set(&mut db, entry, 2, 100.0, 5);

    let csv = db.export_csv().unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Date,Workout,Exercise,Set,Weight,Reps,Volume");
    assert_eq!(lines[1], "2024-01-05,W1,Bench Press,1,100,5,500");
    assert_eq!(lines[2], "2024-01-05,W1,Bench Press,2,100,5,500");
}

#[test]
fn csv_orders_workouts_most_recent_first() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    for (day, name) in [(5, "First"), (20, "Last")] {
        let w = add_workout_on(&mut db, name, 2024, 1, day);
        let entry = add_entry(&mut db, w, bench, 0);
        add_set(&mut db, entry, 1, 60.0, 10);
    }

    let csv = db.export_csv().unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert!(lines[1].starts_with("2024-01-20,Last"));
    assert!(lines[2].starts_with("2024-01-05,First"));
}

// ── Dashboard ──────────────────────────────────────────────────────

#[test]
fn dashboard_on_empty_store_is_all_empty() {
    let db = create_test_db();
    let data = db.dashboard().unwrap();
    assert!(data.last_workout.is_none());
    assert_eq!(data.workouts_this_month, 0);
    assert_eq!(data.total_tonnage_this_month, 0.0);
    assert!(data.compound_lifts.is_empty());
}

#[test]
fn dashboard_counts_current_month_and_tracks_compound_lifts() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    let curls = add_exercise(&mut db, "Barbell Curl");

    let now = Utc::now();
    let w = db
        .create_workout(&NewWorkout {
            name: "Today".into(),
            date: now,
            duration: None,
            notes: None,
            completed: true,
        })
        .unwrap();
    let bench_entry = add_entry(&mut db, w, bench, 0);
    let curl_entry = add_entry(&mut db, w, curls, 1);
    add_set(&mut db, bench_entry, 1, 100.0, 5);
    add_set(&mut db, curl_entry, 1, 40.0, 10);

    let data = db.dashboard().unwrap();
    assert_eq!(data.workouts_this_month, 1);
    assert_eq!(data.total_tonnage_this_month, 900.0);
    assert_eq!(data.last_workout.unwrap().workout.id, w);

    // Only the canonical compound lift shows up, the curl does not.
    assert_eq!(data.compound_lifts.len(), 1);
    let lift = &data.compound_lifts[0];
    assert_eq!(lift.name, "Bench Press");
    assert_eq!(lift.current_max, 100.0);
    assert_eq!(lift.pr, 100.0);
}

#[test]
fn dashboard_ignores_compound_lifts_without_any_record() {
    let mut db = create_test_db();
    add_exercise(&mut db, "Squat");
    let data = db.dashboard().unwrap();
    assert!(data.compound_lifts.is_empty());
}

// ── Backup ─────────────────────────────────────────────────────────

#[test]
fn backup_round_trip_reproduces_all_records() {
    let mut db = create_test_db();
    let bench = add_exercise(&mut db, "Bench Press");
    let w = add_workout_on(&mut db, "W1", 2024, 1, 5);
    let entry = add_entry(&mut db, w, bench, 0);
    add_set(&mut db, entry, 1, 100.0, 5);

    let json = db.export_backup().unwrap();

    // Restore into a fresh database and compare the graphs.
    let mut restored = create_test_db();
    restored.import_backup(&json).unwrap();

    let original = db.workout_with_exercises(w).unwrap().unwrap();
    let roundtrip = restored.workout_with_exercises(w).unwrap().unwrap();
    assert_eq!(roundtrip.workout.name, original.workout.name);
    assert_eq!(roundtrip.workout.date, original.workout.date);
    assert_eq!(roundtrip.workout.created_at, original.workout.created_at);
    assert_eq!(roundtrip.exercises.len(), 1);
    assert_eq!(roundtrip.exercises[0].exercise.id, bench);
    assert_eq!(roundtrip.exercises[0].sets[0].weight, 100.0);

    assert_eq!(restored.all_exercises().unwrap().len(), 1);
}

#[test]
fn import_replaces_existing_contents_entirely() {
    let mut source = create_test_db();
    add_exercise(&mut source, "Bench Press");
    let json = source.export_backup().unwrap();

    let mut target = create_test_db();
    add_exercise(&mut target, "Old Exercise");
    add_workout_on(&mut target, "Old Workout", 2023, 6, 1);

    target.import_backup(&json).unwrap();

    let names: Vec<String> = target
        .all_exercises()
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, ["Bench Press"]);
    assert!(target.all_workouts().unwrap().is_empty());
}

#[test]
fn unsupported_backup_version_fails_without_touching_data() {
    let mut db = create_test_db();
    add_exercise(&mut db, "Bench Press");

    let payload = r#"{"version": 2, "exportedAt": "2024-01-05T00:00:00Z",
        "exercises": [], "workouts": [], "workoutExercises": [], "workoutSets": []}"#;
    let result = db.import_backup(payload);
    assert!(matches!(
        result,
        Err(GymError::UnsupportedBackupVersion { found: 2 })
    ));

    assert_eq!(db.all_exercises().unwrap().len(), 1);
}

#[test]
fn backup_serializes_ids_as_strings_and_dates_as_rfc3339() {
    let mut db = create_test_db();
    add_exercise(&mut db, "Bench Press");

    let json = db.export_backup().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["version"], 1);
    assert!(value["exportedAt"].is_string());
    assert_eq!(value["exercises"][0]["id"], "1");
    assert!(value["exercises"][0]["createdAt"]
        .as_str()
        .unwrap()
        .contains('T'));
}
