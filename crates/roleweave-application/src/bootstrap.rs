//! Service bootstrap.
//!
//! Wires the default JSON repositories and the settings file to the screen
//! services. An explicit `base_dir` (tests, embedding shells) takes
//! precedence over the `storage_dir` override from the settings file.

use crate::{ExperienceBoardService, ProcessCanvasService, RoleMapperService};
use roleweave_core::config::WorkshopSettings;
use roleweave_core::rolemap::MapMode;
use roleweave_infrastructure::{
    settings_storage, JsonExperienceBoardRepository, JsonProcessMapRepository,
    JsonRoleMapRepository, WorkshopPaths,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Loads the workshop settings, falling back to defaults when the settings
/// file is unreadable.
pub fn load_settings(base_dir: Option<&Path>) -> WorkshopSettings {
    let paths = WorkshopPaths::new(base_dir);
    match settings_storage::load_settings(&paths) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load workshop settings, using defaults");
            WorkshopSettings::default()
        }
    }
}

fn resolve_storage_dir(base_dir: Option<&Path>, settings: &WorkshopSettings) -> Option<PathBuf> {
    base_dir
        .map(Path::to_path_buf)
        .or_else(|| settings.storage_dir.clone())
}

/// Opens the role-mapper screen over its default repository.
pub async fn open_role_mapper(base_dir: Option<&Path>) -> anyhow::Result<RoleMapperService> {
    let settings = load_settings(base_dir);
    let storage_dir = resolve_storage_dir(base_dir, &settings);
    let repository = JsonRoleMapRepository::new(storage_dir.as_deref())?;
    let mut service = RoleMapperService::load(Arc::new(repository)).await;
    if settings.expanded_map {
        service.set_mode(MapMode::Expanded);
    }
    Ok(service)
}

/// Opens the process canvas over its default repository.
pub async fn open_process_canvas(base_dir: Option<&Path>) -> anyhow::Result<ProcessCanvasService> {
    let settings = load_settings(base_dir);
    let storage_dir = resolve_storage_dir(base_dir, &settings);
    let repository = JsonProcessMapRepository::new(storage_dir.as_deref())?;
    Ok(ProcessCanvasService::load(Arc::new(repository)).await)
}

/// Opens the experience board over its default repository.
pub async fn open_experience_board(
    base_dir: Option<&Path>,
) -> anyhow::Result<ExperienceBoardService> {
    let settings = load_settings(base_dir);
    let storage_dir = resolve_storage_dir(base_dir, &settings);
    let repository = JsonExperienceBoardRepository::new(storage_dir.as_deref())?;
    Ok(ExperienceBoardService::load(Arc::new(repository)).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roleweave_infrastructure::settings_storage::save_settings;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_screens_share_one_storage_root() {
        let dir = TempDir::new().unwrap();

        let mut mapper = open_role_mapper(Some(dir.path())).await.unwrap();
        mapper.set_role_name("Analyst");
        mapper.persist().await.unwrap();

        let mut canvas = open_process_canvas(Some(dir.path())).await.unwrap();
        canvas.set_name("Invoicing");
        canvas.save().await.unwrap();

        assert!(dir.path().join("sessions/role_map_session.json").exists());
        assert!(dir.path().join("sessions/process_session.json").exists());

        // Both screens restore from the same root.
        let mapper = open_role_mapper(Some(dir.path())).await.unwrap();
        assert_eq!(mapper.map().role.name, "Analyst");
        let canvas = open_process_canvas(Some(dir.path())).await.unwrap();
        assert_eq!(canvas.map().info.name, "Invoicing");
    }

    #[tokio::test]
    async fn test_settings_drive_map_mode() {
        let dir = TempDir::new().unwrap();
        let paths = WorkshopPaths::new(Some(dir.path()));
        save_settings(
            &paths,
            &WorkshopSettings {
                expanded_map: true,
                ..WorkshopSettings::default()
            },
        )
        .unwrap();

        let mapper = open_role_mapper(Some(dir.path())).await.unwrap();
        assert_eq!(mapper.mode(), MapMode::Expanded);

        let board = open_experience_board(Some(dir.path())).await.unwrap();
        assert!(board.board().cards.is_empty());
    }
}
