//! Typed identifiers for the four stored collections.
//!
//! Internally an id is the SQLite rowid (`i64`). Everywhere outside the
//! storage boundary — CLI arguments, URLs, the backup JSON — ids travel
//! as their base-10 string form, so the newtypes serialize as strings
//! and parse back with `FromStr`. The mapping is the identity on the
//! integer value: injective and total over every key SQLite issues.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GymError;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = GymError;

            fn from_str(s: &str) -> crate::error::Result<Self> {
                Ok(Self(s.parse()?))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

entity_id!(
    /// Identifier of an [`Exercise`](super::Exercise) catalog entry.
    ExerciseId
);
entity_id!(
    /// Identifier of a [`Workout`](super::Workout).
    WorkoutId
);
entity_id!(
    /// Identifier of a [`WorkoutExercise`](super::WorkoutExercise) join row.
    WorkoutExerciseId
);
entity_id!(
    /// Identifier of a single performed [`WorkoutSet`](super::WorkoutSet).
    WorkoutSetId
);
