//! Experience-board snapshot repository trait.

use super::ExperienceBoard;
use anyhow::Result;
use async_trait::async_trait;

/// An abstract repository for the experience-board session snapshot.
///
/// One storage slot per screen. Implementations must treat a malformed
/// stored blob as absent (log and fall back to defaults) rather than
/// failing the load.
#[async_trait]
pub trait ExperienceBoardRepository: Send + Sync {
    /// Loads the stored board, if any.
    async fn load(&self) -> Result<Option<ExperienceBoard>>;

    /// Replaces the stored board.
    async fn save(&self, board: &ExperienceBoard) -> Result<()>;

    /// Removes the stored snapshot, if any.
    async fn clear(&self) -> Result<()>;
}
