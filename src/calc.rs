//! Pure numeric helpers: estimated 1RM, weight conversion, month windows.

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::settings::WeightUnit;


const KG_PER_LB: f64 = 2.20462;

/// Round to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Epley formula: `1RM = weight × (1 + reps / 30)`, rounded to 1 decimal.
///
/// A single rep is already a true max; zero reps or zero weight carry no
/// strength signal and estimate to 0.
pub fn calculate_1rm(weight: f64, reps: u32) -> f64 {
    if reps == 0 || weight <= 0.0 {
        return 0.0;
    }
    if reps == 1 {
        return weight;
    }
    round1(weight * (1.0 + reps as f64 / 30.0))
}

pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    match (from, to) {
        (WeightUnit::Kg, WeightUnit::Lbs) => round1(value * KG_PER_LB),
        (WeightUnit::Lbs, WeightUnit::Kg) => round1(value / KG_PER_LB),
        _ => value,
    }
}

pub fn format_weight(value: f64, unit: WeightUnit) -> String {
    format!("{} {}", value, unit)
}

/// Inclusive bounds of the UTC calendar month containing `now`:
/// first day 00:00:00 through last day 23:59:59.
pub fn month_range(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let (year, month) = (now.year(), now.month());
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let start = Utc
        .with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .expect("first day of a valid month");
    let next = Utc
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .single()
        .expect("first day of a valid month");
    (start, next - chrono::Duration::seconds(1))
}
