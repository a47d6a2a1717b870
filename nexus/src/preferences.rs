//! Process-wide user preferences.
//!
//! The preference store is initialized once with [`init`] and then read and
//! written through [`theme`], [`set_theme`] and [`toggle_theme`]. Every write
//! is persisted to the TOML file given at initialization. Without [`init`] the
//! store lives in memory only and starts with the light theme.

use chrono::{DateTime, Utc};
use log::{debug, info};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::ConfigError;

/// File used when the configuration names none.
pub const DEFAULT_PREFERENCES_FILE: &str = "nexus-preferences.toml";

/// Colour scheme of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Anything but `dark` reads as light.
impl From<String> for Theme {
    fn from(raw: String) -> Self {
        if raw.trim().eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.as_str().to_string()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of the preferences file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Read preferences from `path`. A missing file yields the defaults.
pub fn load_preferences(path: &Path) -> Result<Preferences, ConfigError> {
    if !path.exists() {
        debug!("No preferences at {}, using defaults", path.display());
        return Ok(Preferences::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write preferences to `path`, replacing the file.
pub fn save_preferences(path: &Path, preferences: &Preferences) -> Result<(), ConfigError> {
    let content = toml::to_string(preferences).map_err(|e| {
        ConfigError::Invalid(format!("Failed to serialize preferences: {}", e))
    })?;
    fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Default)]
struct PreferenceStore {
    path: Option<PathBuf>,
    preferences: Preferences,
}

static PREFERENCES: OnceLock<RwLock<PreferenceStore>> = OnceLock::new();

fn store() -> &'static RwLock<PreferenceStore> {
    PREFERENCES.get_or_init(|| RwLock::new(PreferenceStore::default()))
}

/// Load the preferences persisted at `path` and persist later writes there.
///
/// Calling it again switches the store to the new file.
pub fn init(path: impl Into<PathBuf>) -> Result<Theme, ConfigError> {
    let path = path.into();
    let preferences = load_preferences(&path)?;
    let theme = preferences.theme;

    let mut store = store().write();
    store.preferences = preferences;
    store.path = Some(path);
    info!("Preferences loaded, theme: {}", theme);
    Ok(theme)
}

/// Current theme.
pub fn theme() -> Theme {
    store().read().preferences.theme
}

/// Change the theme and persist it.
///
/// The in-memory value changes even when persisting fails.
pub fn set_theme(theme: Theme) -> Result<(), ConfigError> {
    store().write().apply(theme)
}

/// Flip between light and dark, returning the new theme.
pub fn toggle_theme() -> Result<Theme, ConfigError> {
    let mut store = store().write();
    let next = store.preferences.theme.toggled();
    store.apply(next)?;
    Ok(next)
}

impl PreferenceStore {
    fn apply(&mut self, theme: Theme) -> Result<(), ConfigError> {
        self.preferences.theme = theme;
        self.preferences.updated_at = Some(Utc::now());

        match self.path {
            Some(ref path) => save_preferences(path, &self.preferences),
            None => Ok(()),
        }
    }
}
