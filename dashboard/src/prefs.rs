use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::timeframes;

pub const PREFERENCES_PATH: &str = "data/preferences.toml";

/// User preferences persisted across restarts. Stored ids are not validated
/// here: the timeframe, theme, and language lookups all fall back to their
/// defaults, so a stale file can never break rendering.
#[derive(Serialize, Deserialize, Clone)]
pub struct Preferences {
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            timeframe: default_timeframe(),
            language: default_language(),
            theme: default_theme(),
        }
    }
}

fn default_timeframe() -> String {
    timeframes::DEFAULT_TIMEFRAME_ID.to_owned()
}

fn default_language() -> String {
    "en".to_owned()
}

fn default_theme() -> String {
    "light".to_owned()
}

/// The single persistence port for user preferences; views never touch
/// storage directly.
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PreferenceStore { path: path.into() }
    }

    /// Returns `Preferences::default()` if the file doesn't exist;
    /// propagates other I/O and parse errors.
    pub fn load(&self) -> io::Result<Preferences> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(e),
        }
    }

    /// Load that degrades to defaults instead of failing a render.
    pub fn load_or_default(&self) -> Preferences {
        match self.load() {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("failed to load preferences: {e}");
                Preferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| *d != Path::new("")) {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(prefs)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> PreferenceStore {
        let path = std::env::temp_dir().join(format!("dashboard-prefs-{name}-{}", std::process::id()));
        let _ = fs::remove_file(&path);
        PreferenceStore::new(path)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let store = temp_store("missing");
        let prefs = store.load().unwrap();
        assert_eq!(prefs.timeframe, timeframes::DEFAULT_TIMEFRAME_ID);
        assert_eq!(prefs.language, "en");
        assert_eq!(prefs.theme, "light");
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store("roundtrip");
        let prefs = Preferences {
            timeframe: "6h".to_owned(),
            language: "ja".to_owned(),
            theme: "dark".to_owned(),
        };
        store.save(&prefs).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.timeframe, "6h");
        assert_eq!(loaded.language, "ja");
        assert_eq!(loaded.theme, "dark");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let store = temp_store("partial");
        fs::write(store.path.clone(), "timeframe = \"1w\"\n").unwrap();

        let prefs = store.load().unwrap();
        assert_eq!(prefs.timeframe, "1w");
        assert_eq!(prefs.language, "en");
        assert_eq!(prefs.theme, "light");
    }
}
