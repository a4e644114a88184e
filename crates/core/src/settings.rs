//! Persisted user settings.
//!
//! Settings live in a small JSON file. Reading never fails: a missing file is
//! a first run, and an unreadable one is logged and replaced by defaults.
//! Writing propagates errors to the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use unitlog_protocol::ThemePreference;

const APP_DIR: &str = "unitlog";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: ThemePreference,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/unitlog/settings.json`, falling back to the home
    /// directory and then the working directory.
    pub fn default_location() -> Self {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR).join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Settings {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file, using defaults");
                return Settings::default();
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "could not read settings, using defaults");
                return Settings::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(settings) => {
                debug!(path = %self.path.display(), ?settings, "loaded settings");
                settings
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring malformed settings file");
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(settings)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), ?settings, "saved settings");
        Ok(())
    }

    /// Load, apply `f`, and save the result.
    pub fn update(&self, f: impl FnOnce(&mut Settings)) -> Result<Settings, SettingsError> {
        let mut settings = self.load();
        f(&mut settings);
        self.save(&settings)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load(), Settings::default());
        assert_eq!(store.load().theme, ThemePreference::System);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("nested/dir/settings.json"));
        let settings = Settings {
            theme: ThemePreference::Dark,
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);

        let written = fs::read_to_string(store.path()).unwrap();
        assert!(written.contains("\"theme\": \"dark\""));
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(SettingsStore::new(&path).load(), Settings::default());

        fs::write(&path, br#"{"theme":"sepia"}"#).unwrap();
        assert_eq!(SettingsStore::new(&path).load(), Settings::default());
    }

    #[test]
    fn missing_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, b"{}").unwrap();
        assert_eq!(SettingsStore::new(&path).load().theme, ThemePreference::System);
    }

    #[test]
    fn update_persists_change() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let updated = store
            .update(|s| s.theme = ThemePreference::Light)
            .unwrap();
        assert_eq!(updated.theme, ThemePreference::Light);
        assert_eq!(store.load().theme, ThemePreference::Light);
    }

    #[test]
    fn default_location_ends_with_app_file() {
        let store = SettingsStore::default_location();
        assert!(store.path().ends_with("unitlog/settings.json"));
    }
}
