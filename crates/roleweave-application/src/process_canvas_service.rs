//! Process-canvas screen service.
//!
//! Owns the process map, the pending link/selection state, the drag
//! lifecycle under zoom, and save/load through the repository. Pointer input
//! arrives in screen coordinates together with the canvas origin; every
//! canvas-local computation divides by the current zoom so interactions stay
//! aligned with the scaled content.

use roleweave_core::canvas::{DragState, LinkSelection};
use roleweave_core::geometry::{CanvasFrame, Point};
use roleweave_core::id;
use roleweave_core::process::{ProcessMap, ProcessMapRepository, ProcessPainPoint, StepType};
use std::sync::Arc;

/// One entry of the right-click type picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub step_type: StepType,
    /// Instances still allowed under the type's cap.
    pub remaining: usize,
    /// Disabled entries stay visible but create nothing.
    pub enabled: bool,
}

/// Screen service for the process canvas.
pub struct ProcessCanvasService {
    map: ProcessMap,
    link: LinkSelection,
    drag: DragState,
    selected_step: Option<String>,
    repository: Arc<dyn ProcessMapRepository>,
}

impl ProcessCanvasService {
    /// Restores the screen from its stored snapshot, falling back to an
    /// empty canvas when nothing (or nothing readable) is stored.
    pub async fn load(repository: Arc<dyn ProcessMapRepository>) -> Self {
        let map = match repository.load().await {
            Ok(Some(map)) => map,
            Ok(None) => ProcessMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load process session, starting empty");
                ProcessMap::new()
            }
        };
        Self {
            map,
            link: LinkSelection::new(),
            drag: DragState::default(),
            selected_step: None,
            repository,
        }
    }

    pub fn map(&self) -> &ProcessMap {
        &self.map
    }

    pub fn selected_step(&self) -> Option<&str> {
        self.selected_step.as_deref()
    }

    pub fn link_pending(&self) -> Option<&str> {
        self.link.pending()
    }

    fn frame(&self, origin: Point) -> CanvasFrame {
        CanvasFrame::new(origin, self.map.zoom)
    }

    /// Screen point to canvas-local point under the current zoom. This is
    /// where the context menu's target position comes from.
    pub fn canvas_point(&self, origin: Point, screen: Point) -> Point {
        self.frame(origin).to_canvas(screen)
    }

    // ------------------------------------------------------------------
    // Process info
    // ------------------------------------------------------------------

    pub fn set_name(&mut self, name: &str) {
        self.map.info.name = name.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.map.info.description = description.to_string();
    }

    pub fn set_business_unit(&mut self, business_unit: &str) {
        self.map.info.business_unit = business_unit.to_string();
    }

    // ------------------------------------------------------------------
    // Steps
    // ------------------------------------------------------------------

    /// The type picker contents: one entry per step type with its remaining
    /// capacity, disabled at zero.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        StepType::ALL
            .iter()
            .map(|&step_type| {
                let remaining = self.map.remaining_capacity(step_type);
                MenuEntry {
                    step_type,
                    remaining,
                    enabled: remaining > 0,
                }
            })
            .collect()
    }

    /// Creates a step at a canvas-local position and selects it. A no-op
    /// returning `None` when the type's cap is reached.
    pub fn add_step(&mut self, step_type: StepType, at: Point) -> Option<String> {
        let id = self.map.add_step_at(step_type, at)?.id.clone();
        self.selected_step = Some(id.clone());
        Some(id)
    }

    /// One node click: selects the step and feeds the link gesture.
    /// Returns `true` when this click completed a new connection.
    pub fn click_step(&mut self, id: &str) -> bool {
        self.selected_step = Some(id.to_string());
        match self.link.click(id) {
            Some((from, to)) => self.map.link(&from, &to),
            None => false,
        }
    }

    /// Removes a step with its connections and linked pain points, clearing
    /// any selection or pending link pointing at it.
    pub fn remove_step(&mut self, id: &str) -> bool {
        let removed = self.map.remove_step(id);
        if removed {
            if self.selected_step.as_deref() == Some(id) {
                self.selected_step = None;
            }
            if self.link.pending() == Some(id) {
                self.link.clear();
            }
        }
        removed
    }

    pub fn rename_step(&mut self, id: &str, name: &str) -> bool {
        self.map.rename_step(id, name)
    }

    pub fn set_step_notes(&mut self, id: &str, notes: &str) -> bool {
        self.map.set_step_notes(id, notes)
    }

    pub fn set_step_meta(&mut self, id: &str, key: &str, value: &str) -> bool {
        self.map.set_step_meta(id, key, value)
    }

    // ------------------------------------------------------------------
    // Drag
    // ------------------------------------------------------------------

    /// Starts dragging a step. Pointer input is screen-space plus the
    /// canvas origin; the grab offset is computed in canvas-local space so
    /// the step tracks the pointer correctly under zoom.
    pub fn begin_drag(&mut self, id: &str, origin: Point, screen: Point) -> bool {
        let Some(step) = self.map.step(id) else {
            return false;
        };
        let pointer = self.frame(origin).to_canvas(screen);
        let position = step.position();
        self.drag.press(id, pointer, position);
        true
    }

    pub fn drag_to(&mut self, origin: Point, screen: Point) {
        let pointer = self.frame(origin).to_canvas(screen);
        if let Some(update) = self.drag.drag(pointer) {
            self.map.move_step(&update.key, update.position);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.release();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // ------------------------------------------------------------------
    // Zoom
    // ------------------------------------------------------------------

    pub fn set_zoom(&mut self, zoom: f64) {
        self.map.set_zoom(zoom);
    }

    pub fn nudge_zoom(&mut self, delta: f64) {
        self.map.nudge_zoom(delta);
    }

    pub fn zoom(&self) -> f64 {
        self.map.zoom
    }

    // ------------------------------------------------------------------
    // Pain points
    // ------------------------------------------------------------------

    pub fn record_pain_point(
        &mut self,
        title: &str,
        step_id: Option<&str>,
        severity: u8,
        description: &str,
    ) -> Option<&ProcessPainPoint> {
        self.map
            .record_pain_point(title, step_id, severity, description)
    }

    pub fn remove_pain_point(&mut self, id: &str) -> bool {
        self.map.remove_pain_point(id)
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Wipes the canvas and every piece of interaction state. Process info
    /// and zoom survive.
    pub fn clear(&mut self) {
        self.map.clear();
        self.link.clear();
        self.selected_step = None;
        self.drag.release();
    }

    /// Writes the session through the repository, assigning the process id
    /// on first save.
    pub async fn save(&mut self) -> anyhow::Result<()> {
        if self.map.info.id.is_none() {
            self.map.info.id = Some(id::session_id());
        }
        self.repository.save(&self.map).await
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
        slot: Mutex<Option<ProcessMap>>,
    }

    #[async_trait]
    impl ProcessMapRepository for MemoryRepository {
        async fn load(&self) -> Result<Option<ProcessMap>> {
            Ok(self.slot.lock().unwrap().clone())
        }
        async fn save(&self, map: &ProcessMap) -> Result<()> {
            *self.slot.lock().unwrap() = Some(map.clone());
            Ok(())
        }
        async fn clear(&self) -> Result<()> {
            *self.slot.lock().unwrap() = None;
            Ok(())
        }
    }

    async fn empty_service() -> ProcessCanvasService {
        ProcessCanvasService::load(Arc::new(MemoryRepository::default())).await
    }

    #[tokio::test]
    async fn test_menu_entry_disables_at_cap() {
        let mut service = empty_service().await;
        for _ in 0..4 {
            assert!(service
                .add_step(StepType::Trigger, Point::default())
                .is_some());
        }
        let entry = service
            .menu_entries()
            .into_iter()
            .find(|e| e.step_type == StepType::Trigger)
            .unwrap();
        assert_eq!(entry.remaining, 0);
        assert!(!entry.enabled);
        assert!(service
            .add_step(StepType::Trigger, Point::default())
            .is_none());

        let id = service.map().steps[0].id.clone();
        service.remove_step(&id);
        assert!(service
            .menu_entries()
            .into_iter()
            .find(|e| e.step_type == StepType::Trigger)
            .unwrap()
            .enabled);
    }

    #[tokio::test]
    async fn test_two_clicks_link_and_duplicates_are_dropped() {
        let mut service = empty_service().await;
        let a = service.add_step(StepType::Trigger, Point::default()).unwrap();
        let b = service.add_step(StepType::Action, Point::default()).unwrap();

        assert!(!service.click_step(&a));
        assert_eq!(service.link_pending(), Some(a.as_str()));
        assert!(service.click_step(&b));
        assert_eq!(service.map().connections.len(), 1);

        // Same pair again: gesture runs, edge is deduplicated.
        service.click_step(&a);
        assert!(!service.click_step(&b));
        assert_eq!(service.map().connections.len(), 1);

        // Reverse direction is a distinct edge.
        service.click_step(&b);
        assert!(service.click_step(&a));
        assert_eq!(service.map().connections.len(), 2);
    }

    #[tokio::test]
    async fn test_drag_divides_by_zoom() {
        let mut service = empty_service().await;
        let id = service
            .add_step(StepType::Action, Point::new(100.0, 100.0))
            .unwrap();
        service.set_zoom(2.0);

        let origin = Point::new(10.0, 10.0);
        // Screen position of the step center under 2x zoom.
        let screen = Point::new(10.0 + 200.0, 10.0 + 200.0);
        assert!(service.begin_drag(&id, origin, screen));
        service.drag_to(origin, Point::new(10.0 + 300.0, 10.0 + 200.0));
        service.end_drag();

        // 100 screen pixels at 2x zoom is 50 canvas units.
        assert_eq!(
            service.map().step(&id).unwrap().position(),
            Point::new(150.0, 100.0)
        );
    }

    #[tokio::test]
    async fn test_context_menu_coordinates_divide_by_zoom() {
        let mut service = empty_service().await;
        service.set_zoom(0.5);
        let at = service.canvas_point(Point::new(20.0, 20.0), Point::new(70.0, 120.0));
        assert_eq!(at, Point::new(100.0, 200.0));
    }

    #[tokio::test]
    async fn test_removing_step_clears_selection_and_pending_link() {
        let mut service = empty_service().await;
        let a = service.add_step(StepType::Trigger, Point::default()).unwrap();
        service.click_step(&a);
        assert!(service.remove_step(&a));
        assert!(service.selected_step().is_none());
        assert!(service.link_pending().is_none());
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_round_trips() {
        let repository = Arc::new(MemoryRepository::default());
        let mut service = ProcessCanvasService::load(repository.clone()).await;
        service.set_name("Invoicing");
        service.add_step(StepType::Trigger, Point::new(50.0, 50.0));
        service.save().await.unwrap();
        let id = service.map().info.id.clone().unwrap();

        let restored = ProcessCanvasService::load(repository).await;
        assert_eq!(restored.map().info.id.as_deref(), Some(id.as_str()));
        assert_eq!(restored.map().steps.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_resets_interaction_state() {
        let mut service = empty_service().await;
        let a = service.add_step(StepType::Trigger, Point::default()).unwrap();
        service.click_step(&a);
        service.record_pain_point("Slow", Some(&a), 4, "");
        service.clear();
        assert!(service.map().steps.is_empty());
        assert!(service.map().pain_points.is_empty());
        assert!(service.selected_step().is_none());
        assert!(service.link_pending().is_none());
    }
}
