//! JSON file-backed role-map snapshot repository.

use crate::dto::RoleMapSessionV1;
use crate::paths::WorkshopPaths;
use crate::storage::{AtomicJsonError, AtomicJsonFile};
use anyhow::Result;
use async_trait::async_trait;
use roleweave_core::rolemap::{RoleMapSnapshot, RoleMapSnapshotRepository};
use std::path::{Path, PathBuf};

/// Persists the role-mapper session as one JSON file.
pub struct JsonRoleMapRepository {
    file: AtomicJsonFile<RoleMapSessionV1>,
}

impl JsonRoleMapRepository {
    /// Creates a repository at the default platform location, or under
    /// `base_dir` when given (tests, embedding shells).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let path = WorkshopPaths::new(base_dir).role_map_session_file()?;
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
impl RoleMapSnapshotRepository for JsonRoleMapRepository {
    async fn load(&self) -> Result<Option<RoleMapSnapshot>> {
        match self.file.load() {
            Ok(Some(dto)) => Ok(Some(dto.into_domain())),
            Ok(None) => Ok(None),
            Err(AtomicJsonError::Json(e)) => {
                tracing::warn!(
                    error = %e,
                    path = %self.file.path().display(),
                    "Failed to parse saved role-map session, starting empty"
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, snapshot: &RoleMapSnapshot) -> Result<()> {
        self.file
            .save(&RoleMapSessionV1::from(snapshot))
            .map_err(Into::into)
    }

    async fn clear(&self) -> Result<()> {
        self.file.remove().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roleweave_core::geometry::Point;
    use roleweave_core::rolemap::RoleMap;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let repo = JsonRoleMapRepository::with_path(dir.path().join("role_map_session.json"));

        let mut map = RoleMap::new();
        map.role.name = "Support Specialist".to_string();
        let id = map.add_collaborator("Product Manager").unwrap();
        map.add_task_to_collaborator(&id, "Sprint planning");

        let mut snapshot = RoleMapSnapshot {
            id: None,
            map,
            node_positions: Default::default(),
        };
        snapshot.node_positions.set(id, Point::new(120.0, 40.0));

        repo.save(&snapshot).await.unwrap();
        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn test_malformed_blob_falls_back_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("role_map_session.json");
        std::fs::write(&path, "null trailing garbage").unwrap();
        let repo = JsonRoleMapRepository::with_path(path);
        assert!(repo.load().await.unwrap().is_none());
    }
}
