//! Default exercise catalog, seeded into an empty store.

use crate::domain::{ExerciseCategory, MuscleGroup, NewExercise};
use crate::error::Result;
use crate::settings::AppLocale;
use crate::storage::GymDatabase;

use ExerciseCategory::{Barbell, Bodyweight, Cable, Dumbbell, Machine};
use MuscleGroup::{Back, Biceps, Chest, Core, Legs, Shoulders, Triceps};

const DEFAULT_EXERCISES_RU: &[(&str, ExerciseCategory, MuscleGroup)] = &[
    ("Жим лёжа", Barbell, Chest),
    ("Присед", Barbell, Legs),
    ("Становая тяга", Barbell, Back),
    ("Жим стоя", Barbell, Shoulders),
    ("Тяга в наклоне", Barbell, Back),
    ("Подъём на бицепс", Barbell, Biceps),
    ("Жим гантелей лёжа", Dumbbell, Chest),
    ("Жим гантелей сидя", Dumbbell, Shoulders),
    ("Разводка гантелей", Dumbbell, Chest),
    ("Молотки", Dumbbell, Biceps),
    ("Выпады с гантелями", Dumbbell, Legs),
    ("Тяга верхнего блока", Cable, Back),
    ("Тяга нижнего блока", Cable, Back),
    ("Разгибание на трицепс", Cable, Triceps),
    ("Жим ногами", Machine, Legs),
    ("Сгибание ног", Machine, Legs),
    ("Разгибание ног", Machine, Legs),
    ("Подтягивания", Bodyweight, Back),
    ("Отжимания на брусьях", Bodyweight, Triceps),
    ("Отжимания", Bodyweight, Chest),
    ("Планка", Bodyweight, Core),
];

const DEFAULT_EXERCISES_EN: &[(&str, ExerciseCategory, MuscleGroup)] = &[
    ("Bench Press", Barbell, Chest),
    ("Squat", Barbell, Legs),
    ("Deadlift", Barbell, Back),
    ("Overhead Press", Barbell, Shoulders),
    ("Barbell Row", Barbell, Back),
    ("Barbell Curl", Barbell, Biceps),
    ("Dumbbell Bench Press", Dumbbell, Chest),
    ("Dumbbell Shoulder Press", Dumbbell, Shoulders),
    ("Dumbbell Fly", Dumbbell, Chest),
    ("Hammer Curl", Dumbbell, Biceps),
    ("Dumbbell Lunge", Dumbbell, Legs),
    ("Lat Pulldown", Cable, Back),
    ("Seated Cable Row", Cable, Back),
    ("Tricep Pushdown", Cable, Triceps),
    ("Leg Press", Machine, Legs),
    ("Leg Curl", Machine, Legs),
    ("Leg Extension", Machine, Legs),
    ("Pull-up", Bodyweight, Back),
    ("Dips", Bodyweight, Triceps),
    ("Push-up", Bodyweight, Chest),
    ("Plank", Bodyweight, Core),
];

/// Insert the default catalog for the given locale if the exercise
/// table is still empty. Returns how many exercises were added.
pub fn seed_database(db: &mut GymDatabase, locale: AppLocale) -> Result<u32> {
    if !db.all_exercises()?.is_empty() {
        return Ok(0);
    }

    let catalog = match locale {
        AppLocale::Ru => DEFAULT_EXERCISES_RU,
        AppLocale::En => DEFAULT_EXERCISES_EN,
    };

    let mut added = 0;
    for &(name, category, muscle_group) in catalog {
        db.create_exercise(&NewExercise {
            name: name.to_string(),
            category,
            muscle_group,
            is_custom: false,
        })?;
        added += 1;
    }
    Ok(added)
}
