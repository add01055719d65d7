//! JSON file-backed process-map repository.

use crate::dto::ProcessSessionV1;
use crate::paths::WorkshopPaths;
use crate::storage::{AtomicJsonError, AtomicJsonFile};
use anyhow::Result;
use async_trait::async_trait;
use roleweave_core::process::{ProcessMap, ProcessMapRepository};
use std::path::{Path, PathBuf};

/// Persists the process-canvas session as one JSON file.
pub struct JsonProcessMapRepository {
    file: AtomicJsonFile<ProcessSessionV1>,
}

impl JsonProcessMapRepository {
    /// Creates a repository at the default platform location, or under
    /// `base_dir` when given (tests, embedding shells).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let path = WorkshopPaths::new(base_dir).process_session_file()?;
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
impl ProcessMapRepository for JsonProcessMapRepository {
    async fn load(&self) -> Result<Option<ProcessMap>> {
        match self.file.load() {
            Ok(Some(dto)) => Ok(Some(dto.into_domain())),
            Ok(None) => Ok(None),
            Err(AtomicJsonError::Json(e)) => {
                tracing::warn!(
                    error = %e,
                    path = %self.file.path().display(),
                    "Failed to parse saved process session, starting empty"
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, map: &ProcessMap) -> Result<()> {
        self.file
            .save(&ProcessSessionV1::from(map))
            .map_err(Into::into)
    }

    async fn clear(&self) -> Result<()> {
        self.file.remove().map_err(Into::into)
    }
}
