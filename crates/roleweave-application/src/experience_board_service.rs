//! Experience-board screen service.
//!
//! Owns the board, the pending link state, the drag lifecycle (this canvas
//! has no zoom), and save/load through the repository.

use roleweave_core::canvas::{DragState, LinkSelection};
use roleweave_core::experience::{CardType, ExperienceBoard, ExperienceBoardRepository};
use roleweave_core::geometry::{CanvasFrame, Point};
use roleweave_core::id;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Screen service for the experience board.
pub struct ExperienceBoardService {
    board: ExperienceBoard,
    link: LinkSelection,
    drag: DragState,
    repository: Arc<dyn ExperienceBoardRepository>,
}

impl ExperienceBoardService {
    /// Restores the screen from its stored snapshot, falling back to an
    /// empty board when nothing (or nothing readable) is stored.
    pub async fn load(repository: Arc<dyn ExperienceBoardRepository>) -> Self {
        let board = match repository.load().await {
            Ok(Some(board)) => board,
            Ok(None) => ExperienceBoard::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load experience session, starting empty");
                ExperienceBoard::new()
            }
        };
        Self {
            board,
            link: LinkSelection::new(),
            drag: DragState::default(),
            repository,
        }
    }

    pub fn board(&self) -> &ExperienceBoard {
        &self.board
    }

    pub fn link_pending(&self) -> Option<&str> {
        self.link.pending()
    }

    /// Screen point to canvas-local point (this canvas is unscaled).
    pub fn canvas_point(&self, origin: Point, screen: Point) -> Point {
        CanvasFrame::unscaled(origin).to_canvas(screen)
    }

    // ------------------------------------------------------------------
    // Experience info
    // ------------------------------------------------------------------

    pub fn set_name(&mut self, name: &str) {
        self.board.info.name = name.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.board.info.description = description.to_string();
    }

    pub fn set_business_unit(&mut self, business_unit: &str) {
        self.board.info.business_unit = business_unit.to_string();
    }

    pub fn set_scenario(&mut self, scenario: &str) {
        self.board.info.scenario = scenario.to_string();
    }

    pub fn set_owner(&mut self, owner: &str) {
        self.board.info.owner = owner.to_string();
    }

    // ------------------------------------------------------------------
    // Cards and nodes
    // ------------------------------------------------------------------

    pub fn add_card(&mut self, card_type: CardType, detail: &str, quantity: u32) -> Option<String> {
        self.board.add_card(card_type, detail, quantity)
    }

    pub fn remove_card(&mut self, id: &str) -> bool {
        self.board.remove_card(id)
    }

    /// Places a node at a canvas-local position (the context-menu action).
    pub fn place_node_at(&mut self, card_type: CardType, at: Point) -> String {
        self.board.place_node_at(card_type, at)
    }

    /// One node click feeds the link gesture. Returns `true` when this
    /// click completed a new connection.
    pub fn click_node(&mut self, id: &str) -> bool {
        match self.link.click(id) {
            Some((from, to)) => self.board.link(&from, &to),
            None => false,
        }
    }

    /// Removes a node with its connections, clearing a pending link
    /// pointing at it.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let removed = self.board.remove_node(id);
        if removed && self.link.pending() == Some(id) {
            self.link.clear();
        }
        removed
    }

    pub fn type_quantities(&self) -> BTreeMap<CardType, u32> {
        self.board.type_quantities()
    }

    // ------------------------------------------------------------------
    // Drag
    // ------------------------------------------------------------------

    pub fn begin_drag(&mut self, id: &str, origin: Point, screen: Point) -> bool {
        let Some(node) = self.board.node(id) else {
            return false;
        };
        let pointer = self.canvas_point(origin, screen);
        let position = node.position();
        self.drag.press(id, pointer, position);
        true
    }

    pub fn drag_to(&mut self, origin: Point, screen: Point) {
        let pointer = self.canvas_point(origin, screen);
        if let Some(update) = self.drag.drag(pointer) {
            self.board.move_node(&update.key, update.position);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.release();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Wipes the canvas (nodes and connections) and the pending link. The
    /// card inventory and experience info survive.
    pub fn clear_canvas(&mut self) {
        self.board.clear_canvas();
        self.link.clear();
        self.drag.release();
    }

    /// Whether the save action is available: the experience needs a name
    /// and at least one card.
    pub fn can_save(&self) -> bool {
        !self.board.info.name.trim().is_empty() && !self.board.cards.is_empty()
    }

    /// Writes the session through the repository, assigning the experience
    /// id on first save. Returns `false` (and writes nothing) while
    /// [`Self::can_save`] is not met.
    pub async fn save(&mut self) -> anyhow::Result<bool> {
        if !self.can_save() {
            return Ok(false);
        }
        if self.board.info.id.is_none() {
            self.board.info.id = Some(id::session_id());
        }
        self.repository.save(&self.board).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryRepository {
        slot: Mutex<Option<ExperienceBoard>>,
    }

    #[async_trait]
    impl ExperienceBoardRepository for MemoryRepository {
        async fn load(&self) -> Result<Option<ExperienceBoard>> {
            Ok(self.slot.lock().unwrap().clone())
        }
        async fn save(&self, board: &ExperienceBoard) -> Result<()> {
            *self.slot.lock().unwrap() = Some(board.clone());
            Ok(())
        }
        async fn clear(&self) -> Result<()> {
            *self.slot.lock().unwrap() = None;
            Ok(())
        }
    }

    async fn empty_service() -> ExperienceBoardService {
        ExperienceBoardService::load(Arc::new(MemoryRepository::default())).await
    }

    #[tokio::test]
    async fn test_link_gesture_between_placed_nodes() {
        let mut service = empty_service().await;
        let a = service.place_node_at(CardType::Persona, Point::new(100.0, 100.0));
        let b = service.place_node_at(CardType::Moment, Point::new(300.0, 100.0));

        assert!(!service.click_node(&a));
        assert!(service.click_node(&b));
        assert_eq!(service.board().connections.len(), 1);
        assert_eq!(service.board().connection_lines().len(), 1);
    }

    #[tokio::test]
    async fn test_removing_node_clears_pending_link() {
        let mut service = empty_service().await;
        let a = service.place_node_at(CardType::Persona, Point::default());
        service.click_node(&a);
        assert!(service.remove_node(&a));
        assert!(service.link_pending().is_none());
    }

    #[tokio::test]
    async fn test_drag_moves_node() {
        let mut service = empty_service().await;
        let id = service.place_node_at(CardType::Wait, Point::new(200.0, 150.0));
        let origin = Point::new(15.0, 25.0);
        assert!(service.begin_drag(&id, origin, Point::new(215.0, 175.0)));
        service.drag_to(origin, Point::new(315.0, 275.0));
        service.end_drag();
        assert_eq!(
            service.board().node(&id).unwrap().position(),
            Point::new(300.0, 250.0)
        );
    }

    #[tokio::test]
    async fn test_save_is_gated_on_name_and_cards() {
        let repository = Arc::new(MemoryRepository::default());
        let mut service = ExperienceBoardService::load(repository.clone()).await;
        assert!(!service.can_save());
        assert!(!service.save().await.unwrap());
        assert!(repository.slot.lock().unwrap().is_none());

        service.set_name("Onboarding");
        service.add_card(CardType::Persona, "New joiner", 1);
        assert!(service.save().await.unwrap());
        assert!(service.board().info.id.is_some());

        let restored = ExperienceBoardService::load(repository).await;
        assert_eq!(restored.board().cards.len(), 1);
        assert_eq!(restored.board().info.name, "Onboarding");
    }
}
