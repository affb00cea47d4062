//! Command handlers: thin glue between the CLI and the library core.

use std::path::Path;

use anyhow::{Context, Result};

use crate::calc::{convert_weight, format_weight};
use crate::domain::{ExerciseCategory, ExerciseId, MuscleGroup, NewExercise, WorkoutId};
use crate::seed::seed_database;
use crate::settings::{AppLocale, AppSettings, WeightUnit};
use crate::storage::GymDatabase;

/// Convert a stored (kg) weight into the display unit and format it.
fn display_weight(kg: f64, unit: WeightUnit) -> String {
    format_weight(convert_weight(kg, WeightUnit::Kg, unit), unit)
}

pub fn handle_seed(db: &mut GymDatabase, locale: AppLocale) -> Result<()> {
    let added = seed_database(db, locale)?;
    if added == 0 {
        println!("Exercise catalog is not empty; nothing seeded.");
    } else {
        println!("Seeded {added} exercises.");
    }
    Ok(())
}

pub fn handle_exercises(db: &GymDatabase, search: Option<String>) -> Result<()> {
    let exercises = match search {
        Some(query) => db.search_exercises(&query)?,
        None => db.all_exercises()?,
    };
    for e in exercises {
        println!("{:>4}  {}  [{} / {}]", e.id, e.name, e.category, e.muscle_group);
    }
    Ok(())
}

pub fn handle_add_exercise(
    db: &mut GymDatabase,
    name: String,
    category: ExerciseCategory,
    muscle_group: MuscleGroup,
) -> Result<()> {
    let id = db.create_exercise(&NewExercise {
        name,
        category,
        muscle_group,
        is_custom: true,
    })?;
    println!("Added exercise {id}.");
    Ok(())
}

pub fn handle_delete_exercise(db: &mut GymDatabase, id: ExerciseId) -> Result<()> {
    db.delete_exercise(id)?;
    println!("Deleted exercise {id}. Logged history keeps its entries.");
    Ok(())
}

pub fn handle_workouts(db: &GymDatabase) -> Result<()> {
    for w in db.all_workouts()? {
        let status = if w.completed { "done" } else { "open" };
        println!("{:>4}  {}  {}  [{}]", w.id, w.date.date_naive(), w.name, status);
    }
    Ok(())
}

pub fn handle_workout(db: &GymDatabase, id: WorkoutId, unit: WeightUnit) -> Result<()> {
    let Some(full) = db.workout_with_exercises(id)? else {
        println!("No workout with id {id}.");
        return Ok(());
    };

    println!("{}  {}", full.workout.date.date_naive(), full.workout.name);
    if let Some(notes) = &full.workout.notes {
        println!("  {notes}");
    }
    for entry in &full.exercises {
        println!("  {}", entry.exercise.name);
        for set in &entry.sets {
            println!(
                "    #{}: {} x {} reps",
                set.set_number,
                display_weight(set.weight, unit),
                set.reps
            );
        }
    }
    Ok(())
}

pub fn handle_delete_workout(db: &mut GymDatabase, id: WorkoutId) -> Result<()> {
    db.delete_workout(id)?;
    println!("Deleted workout {id} and all its sets.");
    Ok(())
}

pub fn handle_stats(db: &GymDatabase, exercise_id: ExerciseId, unit: WeightUnit) -> Result<()> {
    let Some(stats) = db.exercise_stats(exercise_id)? else {
        println!("No exercise with id {exercise_id}.");
        return Ok(());
    };

    println!("{}", stats.exercise_name);
    println!("  PR:            {}", display_weight(stats.personal_record, unit));
    println!("  est. 1RM:      {}", display_weight(stats.pr_1rm, unit));
    println!("  avg weight:    {}", display_weight(stats.avg_weight, unit));
    println!("  total volume:  {}", display_weight(stats.total_volume, unit));
    println!("  sets / reps:   {} / {}", stats.total_sets, stats.total_reps);
    println!("  workouts:      {}", stats.frequency);
    for point in &stats.history {
        println!(
            "  {}  max {}  vol {}",
            point.date.date_naive(),
            display_weight(point.max_weight, unit),
            display_weight(point.total_volume, unit)
        );
    }
    Ok(())
}

pub fn handle_dashboard(db: &GymDatabase, unit: WeightUnit) -> Result<()> {
    let data = db.dashboard()?;

    match &data.last_workout {
        Some(full) => println!(
            "Last workout: {} ({})",
            full.workout.name,
            full.workout.date.date_naive()
        ),
        None => println!("No workouts logged yet."),
    }
    println!("Workouts this month: {}", data.workouts_this_month);
    println!(
        "Tonnage this month:  {}",
        display_weight(data.total_tonnage_this_month, unit)
    );
    for lift in &data.compound_lifts {
        println!(
            "  {}: current {}  PR {}",
            lift.name,
            display_weight(lift.current_max, unit),
            display_weight(lift.pr, unit)
        );
    }
    Ok(())
}

fn write_or_print(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}.", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

pub fn handle_export_csv(db: &GymDatabase, output: Option<&Path>) -> Result<()> {
    write_or_print(&db.export_csv()?, output)
}

pub fn handle_export_backup(db: &GymDatabase, output: Option<&Path>) -> Result<()> {
    write_or_print(&db.export_backup()?, output)
}

pub fn handle_import_backup(db: &mut GymDatabase, input: &Path) -> Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    db.import_backup(&json)?;
    println!("Restored backup from {}.", input.display());
    Ok(())
}

pub fn handle_set_unit(unit: WeightUnit) -> Result<()> {
    let mut settings = AppSettings::load();
    settings.weight_unit = unit;
    settings.save()?;
    println!("Display unit set to {unit}.");
    Ok(())
}
