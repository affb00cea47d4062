//! Display settings (weight unit, locale, theme), persisted as a small
//! JSON blob under the user config directory.
//!
//! Purely a presentation concern: the storage and stats layers never
//! read these. Stats output stays in kilograms; unit conversion happens
//! at display time.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::error::{GymError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lbs,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kg => write!(f, "kg"),
            Self::Lbs => write!(f, "lbs"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "kg" => Ok(Self::Kg),
            "lbs" => Ok(Self::Lbs),
            other => Err(GymError::validation(format!(
                "unrecognized weight unit: {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppLocale {
    Ru,
    En,
}

impl FromStr for AppLocale {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(GymError::validation(format!(
                "unrecognized locale: {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppTheme {
    Dark,
    Light,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub weight_unit: WeightUnit,
    pub locale: AppLocale,
    pub theme: AppTheme,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::Kg,
            locale: AppLocale::Ru,
            theme: AppTheme::Dark,
        }
    }
}

impl AppSettings {
    pub fn path() -> Result<PathBuf> {
        let base = config_dir().ok_or(GymError::MissingBaseDir("config"))?;
        Ok(base.join("gymlog").join("settings.json"))
    }

    /// Read saved settings, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        Self::path()
            .and_then(|path| {
                let raw = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&raw)?)
            })
            .unwrap_or_default()
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
