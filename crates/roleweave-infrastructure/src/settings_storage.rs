//! Workshop settings storage (TOML).

use crate::paths::WorkshopPaths;
use roleweave_core::config::WorkshopSettings;
use roleweave_core::error::{Result, RoleweaveError};
use std::fs;
use std::path::Path;

/// Loads the settings from the default settings file path.
///
/// This function is purely responsible for reading the TOML file from disk.
///
/// # Returns
///
/// - `Ok(WorkshopSettings)`: parsed settings, or defaults when the file does
///   not exist or is empty
/// - `Err(_)`: the file exists but cannot be read or parsed
pub fn load_settings(paths: &WorkshopPaths) -> Result<WorkshopSettings> {
    let path = paths
        .settings_file()
        .map_err(|e| RoleweaveError::config(e.to_string()))?;
    load_settings_from(&path)
}

/// Loads the settings from an explicit path.
pub fn load_settings_from(path: &Path) -> Result<WorkshopSettings> {
    if !path.exists() {
        return Ok(WorkshopSettings::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(WorkshopSettings::default());
    }

    let settings: WorkshopSettings = toml::from_str(&content)?;
    Ok(settings)
}

/// Saves the settings to the default settings file path, creating the
/// application directory if needed.
pub fn save_settings(paths: &WorkshopPaths, settings: &WorkshopSettings) -> Result<()> {
    let path = paths
        .settings_file()
        .map_err(|e| RoleweaveError::config(e.to_string()))?;
    save_settings_to(&path, settings)
}

/// Saves the settings to an explicit path.
pub fn save_settings_to(path: &Path, settings: &WorkshopSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let toml_string = toml::to_string_pretty(settings)?;
    fs::write(path, toml_string)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, WorkshopSettings::default());
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), WorkshopSettings::default());
    }

    #[test]
    fn test_save_and_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let settings = WorkshopSettings {
            expanded_map: true,
            zoom_step: 0.25,
            ..WorkshopSettings::default()
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "zoom_step = \"fast\"").unwrap();
        let err = load_settings_from(&path).unwrap_err();
        assert!(err.is_serialization());
    }
}
