//! Local key-value settings: theme, unit system, onboarding flag.
//!
//! Persisted as a small JSON file. Loading is forgiving — a missing or
//! corrupt file yields defaults with a warning, never a startup failure.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

/// Measurement system for display formatting. Stored values are always
/// imperial (pounds, inches, miles); metric is converted at display time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

impl UnitSystem {
    /// Format a weight stored in pounds.
    pub fn format_weight(&self, pounds: f64) -> String {
        match self {
            UnitSystem::Imperial => format!("{:.1} lbs", pounds),
            UnitSystem::Metric => format!("{:.1} kg", pounds * 0.453592),
        }
    }

    /// Format a height stored in inches.
    pub fn format_height(&self, inches: f64) -> String {
        match self {
            UnitSystem::Imperial => {
                let feet = (inches / 12.0).floor();
                let rest = inches - feet * 12.0;
                format!("{}'{}\"", feet as u32, rest as u32)
            }
            UnitSystem::Metric => format!("{:.0} cm", inches * 2.54),
        }
    }

    /// Format a distance stored in miles.
    pub fn format_distance(&self, miles: f64) -> String {
        match self {
            UnitSystem::Imperial => format!("{:.2} mi", miles),
            UnitSystem::Metric => format!("{:.2} km", miles * 1.60934),
        }
    }

    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "lbs",
            UnitSystem::Metric => "kg",
        }
    }

    pub fn distance_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "mi",
            UnitSystem::Metric => "km",
        }
    }
}

/// Locally persisted app settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemePreference,
    pub unit_system: UnitSystem,
    pub onboarding_complete: bool,
}

/// File-backed settings storage.
#[derive(Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load settings, falling back to defaults on a missing or unreadable
    /// file.
    pub fn load(&self) -> Settings {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Settings file corrupt, using defaults"
                );
                Settings::default()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Failed to read settings, using defaults"
                );
                Settings::default()
            }
        }
    }

    /// Persist settings, creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(settings)
            .map_err(|e| anyhow::anyhow!("Settings serialization failed: {}", e))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));

        let settings = store.load();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.unit_system, UnitSystem::Imperial);
        assert!(!settings.onboarding_complete);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("nested").join("settings.json"));

        let settings = Settings {
            theme: ThemePreference::Dark,
            unit_system: UnitSystem::Metric,
            onboarding_complete: true,
        };
        store.save(&settings).unwrap();

        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SettingsStore::new(path);
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_weight_formatting() {
        assert_eq!(UnitSystem::Imperial.format_weight(180.0), "180.0 lbs");
        assert_eq!(UnitSystem::Metric.format_weight(180.0), "81.6 kg");
    }

    #[test]
    fn test_height_formatting() {
        assert_eq!(UnitSystem::Imperial.format_height(71.0), "5'11\"");
        assert_eq!(UnitSystem::Metric.format_height(71.0), "180 cm");
    }

    #[test]
    fn test_distance_formatting() {
        assert_eq!(UnitSystem::Imperial.format_distance(3.1), "3.10 mi");
        assert_eq!(UnitSystem::Metric.format_distance(3.1), "4.99 km");
    }
}
