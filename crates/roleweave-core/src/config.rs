//! Workshop settings.
//!
//! Small, optional knobs read from the settings file at startup. Every field
//! defaults independently so partial files load cleanly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default zoom increment of the process-canvas stepper.
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

/// Application-level settings that persist across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkshopSettings {
    /// Overrides the platform config directory for all snapshot storage.
    pub storage_dir: Option<PathBuf>,
    /// Whether the collaboration map opens in expanded (full-screen) mode.
    pub expanded_map: bool,
    /// Zoom increment of the process-canvas stepper buttons.
    pub zoom_step: f64,
}

impl Default for WorkshopSettings {
    fn default() -> Self {
        Self {
            storage_dir: None,
            expanded_map: false,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl WorkshopSettings {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = WorkshopSettings::new();
        assert!(settings.storage_dir.is_none());
        assert!(!settings.expanded_map);
        assert_eq!(settings.zoom_step, DEFAULT_ZOOM_STEP);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: WorkshopSettings = toml::from_str("expanded_map = true").unwrap();
        assert!(settings.expanded_map);
        assert_eq!(settings.zoom_step, DEFAULT_ZOOM_STEP);
        assert!(settings.storage_dir.is_none());
    }
}
