//! Role-map snapshot repository trait.
//!
//! Defines the persistence port for the role-mapper screen. The screen has a
//! single storage slot; there is no per-id lookup.

use super::RoleMap;
use crate::canvas::PositionOverrides;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Everything the role-mapper screen persists: the store contents plus the
/// user's manual node placements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoleMapSnapshot {
    /// Session id, assigned on first save.
    pub id: Option<String>,
    pub map: RoleMap,
    pub node_positions: PositionOverrides,
}

/// An abstract repository for the role-mapper session snapshot.
///
/// Decouples the screen's state from the storage mechanism. Implementations
/// must treat a malformed stored blob as absent (log and fall back to
/// defaults) rather than failing the load.
#[async_trait]
pub trait RoleMapSnapshotRepository: Send + Sync {
    /// Loads the stored snapshot, if any.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(snapshot))`: a snapshot was stored and parsed
    /// - `Ok(None)`: nothing stored, or the stored blob was unreadable
    /// - `Err(_)`: the storage itself failed
    async fn load(&self) -> Result<Option<RoleMapSnapshot>>;

    /// Replaces the stored snapshot.
    async fn save(&self, snapshot: &RoleMapSnapshot) -> Result<()>;

    /// Removes the stored snapshot, if any.
    async fn clear(&self) -> Result<()>;
}
