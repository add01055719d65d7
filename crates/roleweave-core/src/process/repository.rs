//! Process-map snapshot repository trait.

use super::ProcessMap;
use anyhow::Result;
use async_trait::async_trait;

/// An abstract repository for the process-canvas session snapshot.
///
/// One storage slot per screen. Implementations must treat a malformed
/// stored blob as absent (log and fall back to defaults) rather than
/// failing the load.
#[async_trait]
pub trait ProcessMapRepository: Send + Sync {
    /// Loads the stored process map, if any.
    async fn load(&self) -> Result<Option<ProcessMap>>;

    /// Replaces the stored process map.
    async fn save(&self, map: &ProcessMap) -> Result<()>;

    /// Removes the stored snapshot, if any.
    async fn clear(&self) -> Result<()>;
}
