//! Unified path management for Roleweave storage.
//!
//! All snapshot and settings files live under one application directory
//! (`~/.config/roleweave/` on Linux), with an explicit base-directory
//! override for tests and embedding shells.
//!
//! # Directory structure
//!
//! ```text
//! ~/.config/roleweave/
//! ├── settings.toml               # workshop settings
//! └── sessions/
//!     ├── role_map_session.json   # role-mapper snapshot
//!     ├── process_session.json    # process-canvas snapshot
//!     └── experience_session.json # experience-board snapshot
//! ```

use std::path::{Path, PathBuf};

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path resolution for Roleweave files.
#[derive(Debug, Clone, Default)]
pub struct WorkshopPaths {
    base_override: Option<PathBuf>,
}

impl WorkshopPaths {
    /// Uses the platform config directory, or `base_dir` when given (tests,
    /// embedding shells).
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_override: base_dir.map(|p| p.to_path_buf()),
        }
    }

    /// The Roleweave application directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base_override {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("roleweave"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Path of the settings file.
    pub fn settings_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("settings.toml"))
    }

    fn sessions_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("sessions"))
    }

    /// Snapshot file of the role-mapper screen.
    pub fn role_map_session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.sessions_dir()?.join("role_map_session.json"))
    }

    /// Snapshot file of the process canvas.
    pub fn process_session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.sessions_dir()?.join("process_session.json"))
    }

    /// Snapshot file of the experience board.
    pub fn experience_session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.sessions_dir()?.join("experience_session.json"))
    }
}
