//! Settings persistence
//!
//! Reads and writes [`BoardSettings`] as JSON. The default location is
//! `settings.json` in the user's configuration directory; a missing or broken
//! file falls back to defaults so the board always comes up.

use super::error::CoreResult;
use super::settings::BoardSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Path to `settings.json` in the user's configuration directory
///
/// Falls back to a local "settings.json" if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "morelli", "Morelli") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and validate settings from `path`
pub fn read_settings(path: &Path) -> CoreResult<BoardSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: BoardSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from `path`, or defaults if it is absent or unusable
pub fn load_settings(path: &Path) -> BoardSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return BoardSettings::default();
    }
    match read_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("[SETTINGS] {} ({:?}). Using defaults.", e, path);
            BoardSettings::default()
        }
    }
}

/// Write `settings` to `path`, creating the directory if needed
pub fn save_settings(settings: &BoardSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
