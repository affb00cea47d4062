//! Unit tests for entity validation and the typed identifiers.

use super::*;

#[test]
fn category_parses_case_insensitively() {
    assert_eq!(
        "Barbell".parse::<ExerciseCategory>().unwrap(),
        ExerciseCategory::Barbell
    );
    assert_eq!(ExerciseCategory::Bodyweight.to_string(), "bodyweight");
    assert!("kettlebell".parse::<ExerciseCategory>().is_err());
}

#[test]
fn muscle_group_round_trips_through_strings() {
    for group in [
        MuscleGroup::Chest,
        MuscleGroup::FullBody,
        MuscleGroup::Forearms,
        MuscleGroup::Calves,
    ] {
        assert_eq!(group.as_str().parse::<MuscleGroup>().unwrap(), group);
    }
}

#[test]
fn enums_serialize_in_snake_case() {
    assert_eq!(
        serde_json::to_string(&MuscleGroup::FullBody).unwrap(),
        "\"full_body\""
    );
    assert_eq!(
        serde_json::to_string(&ExerciseCategory::Dumbbell).unwrap(),
        "\"dumbbell\""
    );
}

#[test]
fn ids_render_and_parse_as_strings() {
    let id = ExerciseId::new(42);
    assert_eq!(id.to_string(), "42");
    assert_eq!("42".parse::<ExerciseId>().unwrap(), id);
    assert!("not-a-number".parse::<WorkoutId>().is_err());
}

#[test]
fn ids_serialize_as_json_strings() {
    assert_eq!(serde_json::to_string(&WorkoutSetId::new(7)).unwrap(), "\"7\"");
    let back: WorkoutSetId = serde_json::from_str("\"7\"").unwrap();
    assert_eq!(back, WorkoutSetId::new(7));
}

#[test]
fn empty_names_are_rejected() {
    let exercise = NewExercise {
        name: "   ".into(),
        category: ExerciseCategory::Other,
        muscle_group: MuscleGroup::Core,
        is_custom: true,
    };
    assert!(matches!(
        exercise.validate(),
        Err(GymError::Validation { .. })
    ));

    let patch = WorkoutPatch {
        name: Some(String::new()),
        ..Default::default()
    };
    assert!(patch.validate().is_err());
}

#[test]
fn malformed_set_data_is_rejected() {
    let base = NewWorkoutSet {
        workout_exercise_id: WorkoutExerciseId::new(1),
        set_number: 1,
        weight: 60.0,
        reps: 5,
        notes: None,
        completed: true,
    };

    let negative_weight = NewWorkoutSet {
        weight: -5.0,
        ..base.clone()
    };
    assert!(negative_weight.validate().is_err());

    let nan_weight = NewWorkoutSet {
        weight: f64::NAN,
        ..base.clone()
    };
    assert!(nan_weight.validate().is_err());

    let zero_set_number = NewWorkoutSet {
        set_number: 0,
        ..base.clone()
    };
    assert!(zero_set_number.validate().is_err());

    assert!(base.validate().is_ok());
}

#[test]
fn patch_validation_only_checks_provided_fields() {
    assert!(WorkoutSetPatch::default().validate().is_ok());
    let bad = WorkoutSetPatch {
        weight: Some(-1.0),
        ..Default::default()
    };
    assert!(bad.validate().is_err());
}
