//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;

use gymlog::{
    cli::{Commands, GymLog},
    commands::*,
    settings::AppSettings,
    GymDatabase,
};

fn main() -> Result<()> {
    env_logger::init();

    let app = GymLog::parse();
    let settings = AppSettings::load();
    let unit = settings.weight_unit;

    let mut db = match &app.db {
        Some(path) => GymDatabase::open(path)?,
        None => GymDatabase::open_default()?,
    };

    match app.command {
        Commands::Seed { locale } => handle_seed(&mut db, locale)?,
        Commands::Exercises { search } => handle_exercises(&db, search)?,
        Commands::AddExercise {
            name,
            category,
            muscle_group,
        } => handle_add_exercise(&mut db, name, category, muscle_group)?,
        Commands::DeleteExercise { id } => handle_delete_exercise(&mut db, id)?,
        Commands::Workouts => handle_workouts(&db)?,
        Commands::Workout { id } => handle_workout(&db, id, unit)?,
        Commands::DeleteWorkout { id } => handle_delete_workout(&mut db, id)?,
        Commands::Stats { exercise_id } => handle_stats(&db, exercise_id, unit)?,
        Commands::Dashboard => handle_dashboard(&db, unit)?,
        Commands::ExportCsv { output } => handle_export_csv(&db, output.as_deref())?,
        Commands::ExportBackup { output } => handle_export_backup(&db, output.as_deref())?,
        Commands::ImportBackup { input } => handle_import_backup(&mut db, &input)?,
        Commands::SetUnit { unit } => handle_set_unit(unit)?,
    }

    Ok(())
}
