//! JSON file-backed experience-board repository.

use crate::dto::ExperienceSessionV1;
use crate::paths::WorkshopPaths;
use crate::storage::{AtomicJsonError, AtomicJsonFile};
use anyhow::Result;
use async_trait::async_trait;
use roleweave_core::experience::{ExperienceBoard, ExperienceBoardRepository};
use std::path::{Path, PathBuf};

/// Persists the experience-board session as one JSON file.
pub struct JsonExperienceBoardRepository {
    file: AtomicJsonFile<ExperienceSessionV1>,
}

impl JsonExperienceBoardRepository {
    /// Creates a repository at the default platform location, or under
    /// `base_dir` when given (tests, embedding shells).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let path = WorkshopPaths::new(base_dir).experience_session_file()?;
        Ok(Self::with_path(path))
    }

    /// Creates a repository over an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }
}

#[async_trait]
impl ExperienceBoardRepository for JsonExperienceBoardRepository {
    async fn load(&self) -> Result<Option<ExperienceBoard>> {
        match self.file.load() {
            Ok(Some(dto)) => Ok(Some(dto.into_domain())),
            Ok(None) => Ok(None),
            Err(AtomicJsonError::Json(e)) => {
                tracing::warn!(
                    error = %e,
                    path = %self.file.path().display(),
                    "Failed to parse saved experience session, starting empty"
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, board: &ExperienceBoard) -> Result<()> {
        self.file
            .save(&ExperienceSessionV1::from(board))
            .map_err(Into::into)
    }

    async fn clear(&self) -> Result<()> {
        self.file.remove().map_err(Into::into)
    }
}
