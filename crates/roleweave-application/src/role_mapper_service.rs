//! Role-mapper screen service.
//!
//! Owns the role-map store, the collaboration-map canvas state (manual node
//! placements, drag lifecycle, compact/expanded mode), the in-memory list of
//! named "saved roles", and the snapshot persistence behind the screen's
//! save action. The shell calls in with typed values and canvas-local
//! pointer coordinates; everything else is handled here.

use roleweave_core::analysis::{
    classify_pain_points, pain_summary, shared_tasks_map, shared_tools_map, task_options, PainLoss,
    PainPartition,
};
use roleweave_core::canvas::{DragState, PositionOverrides};
use roleweave_core::geometry::Point;
use roleweave_core::id;
use roleweave_core::rolemap::{
    build_scene, node_position, CollaborationScene, Frequency, MapMode, PainPoint, RoleMap,
    RoleMapSnapshot, RoleMapSnapshotRepository, RoleSummary,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A named in-memory snapshot of the session ("saved role").
///
/// Saved roles live only for the lifetime of the service; the cross-restart
/// snapshot goes through the repository instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedRole {
    pub id: String,
    pub label: String,
    /// RFC 3339 timestamp of the save.
    pub saved_at: String,
    pub map: RoleMap,
    pub node_positions: PositionOverrides,
}

/// Screen service for the role mapper.
pub struct RoleMapperService {
    map: RoleMap,
    node_positions: PositionOverrides,
    drag: DragState,
    mode: MapMode,
    session_id: Option<String>,
    saved_roles: Vec<SavedRole>,
    repository: Arc<dyn RoleMapSnapshotRepository>,
}

impl RoleMapperService {
    /// Restores the screen from its stored snapshot, falling back to an
    /// empty session when nothing (or nothing readable) is stored.
    pub async fn load(repository: Arc<dyn RoleMapSnapshotRepository>) -> Self {
        let snapshot = match repository.load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load role-map session, starting empty");
                None
            }
        };
        let (session_id, map, node_positions) = match snapshot {
            Some(snapshot) => (snapshot.id, snapshot.map, snapshot.node_positions),
            None => (None, RoleMap::new(), PositionOverrides::new()),
        };
        let mut service = Self {
            map,
            node_positions,
            drag: DragState::default(),
            mode: MapMode::default(),
            session_id,
            saved_roles: Vec::new(),
            repository,
        };
        service.reconcile_overrides();
        service
    }

    pub fn map(&self) -> &RoleMap {
        &self.map
    }

    pub fn mode(&self) -> MapMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: MapMode) {
        self.mode = mode;
    }

    pub fn node_positions(&self) -> &PositionOverrides {
        &self.node_positions
    }

    // ------------------------------------------------------------------
    // Role profile
    // ------------------------------------------------------------------

    pub fn set_role_name(&mut self, name: &str) {
        self.map.role.name = name.to_string();
    }

    pub fn set_role_headcount(&mut self, headcount: Option<u32>) {
        self.map.role.headcount = headcount;
    }

    pub fn set_role_description(&mut self, description: &str) {
        self.map.role.description = description.to_string();
    }

    pub fn summary(&self) -> RoleSummary {
        self.map.summary()
    }

    // ------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------

    pub fn add_goal(&mut self, goal: &str) -> bool {
        self.map.add_goal(goal)
    }

    pub fn remove_goal(&mut self, index: usize) {
        self.map.remove_goal(index);
    }

    pub fn add_tool(&mut self, tool: &str) -> bool {
        self.map.add_tool(tool)
    }

    pub fn remove_tool(&mut self, index: usize) {
        self.map.remove_tool(index);
    }

    pub fn add_solo_task(&mut self, title: &str, frequency: Frequency) -> bool {
        self.map.add_solo_task(title, frequency)
    }

    pub fn remove_solo_task(&mut self, index: usize) {
        self.map.remove_solo_task(index);
    }

    // ------------------------------------------------------------------
    // Collaborators
    // ------------------------------------------------------------------

    /// Adds a collaborator and returns its node key.
    pub fn add_collaborator(&mut self, name: &str) -> Option<String> {
        self.map.add_collaborator(name)
    }

    /// Removes a collaborator; its manual placement is garbage-collected in
    /// the same pass.
    pub fn remove_collaborator(&mut self, id: &str) -> bool {
        let removed = self.map.remove_collaborator(id);
        if removed {
            self.reconcile_overrides();
        }
        removed
    }

    pub fn add_task_to_collaborator(&mut self, id: &str, task: &str) -> bool {
        self.map.add_task_to_collaborator(id, task)
    }

    pub fn remove_task_from_collaborator(&mut self, id: &str, index: usize) {
        self.map.remove_task_from_collaborator(id, index);
    }

    pub fn add_tool_to_collaborator(&mut self, id: &str, tool: &str) -> bool {
        self.map.add_tool_to_collaborator(id, tool)
    }

    pub fn remove_tool_from_collaborator(&mut self, id: &str, index: usize) {
        self.map.remove_tool_from_collaborator(id, index);
    }

    // ------------------------------------------------------------------
    // Pain points
    // ------------------------------------------------------------------

    pub fn record_pain_point(&mut self, pain: PainPoint) -> bool {
        self.map.record_pain_point(pain)
    }

    pub fn remove_pain_point(&mut self, index: usize) {
        self.map.remove_pain_point(index);
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    pub fn shared_tasks(&self) -> BTreeMap<String, Vec<String>> {
        shared_tasks_map(&self.map.collaborators)
    }

    pub fn shared_tools(&self) -> BTreeMap<String, Vec<String>> {
        shared_tools_map(&self.map.tools, &self.map.collaborators)
    }

    pub fn task_options(&self) -> Vec<String> {
        task_options(&self.map.collaborators, &self.map.solo_tasks)
    }

    pub fn pain_summary(&self) -> PainLoss {
        pain_summary(&self.map.pain_points)
    }

    /// Pain points split into isolated vs. collaborative for the
    /// facilitator summary.
    pub fn classify_pain_points(&self) -> PainPartition<'_> {
        let shared = self.shared_tasks();
        classify_pain_points(&self.map.pain_points, &shared)
    }

    /// The full collaboration-map scene for the current mode.
    pub fn scene(&self) -> CollaborationScene {
        build_scene(&self.map, &self.node_positions, self.mode)
    }

    // ------------------------------------------------------------------
    // Canvas interaction
    // ------------------------------------------------------------------

    /// Starts dragging a collaborator node. Returns `false` (and stays
    /// idle) for unknown keys.
    pub fn begin_drag(&mut self, key: &str, pointer: Point) -> bool {
        match node_position(&self.map, &self.node_positions, self.mode, key) {
            Some(position) => {
                self.drag.press(key, pointer, position);
                true
            }
            None => false,
        }
    }

    /// Feeds a pointer move into the active drag. The override map is the
    /// only thing written while dragging.
    pub fn drag_to(&mut self, pointer: Point) {
        if let Some(update) = self.drag.drag(pointer) {
            self.node_positions.set(update.key, update.position);
        }
    }

    /// Ends the drag; called for pointer-up and pointer-leave alike.
    pub fn end_drag(&mut self) {
        self.drag.release();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    fn reconcile_overrides(&mut self) {
        let live: Vec<String> = self.map.collaborator_keys().map(String::from).collect();
        if self
            .node_positions
            .prune(live.iter().map(String::as_str))
        {
            tracing::debug!("Pruned stale node position overrides");
        }
    }

    // ------------------------------------------------------------------
    // Saved roles (session-scoped)
    // ------------------------------------------------------------------

    /// Captures the current session under a name. Blank labels are ignored.
    pub fn save_role(&mut self, label: &str) -> Option<&SavedRole> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.saved_roles.push(SavedRole {
            id: id::session_id(),
            label: trimmed.to_string(),
            saved_at: chrono::Utc::now().to_rfc3339(),
            map: self.map.clone(),
            node_positions: self.node_positions.clone(),
        });
        self.saved_roles.last()
    }

    pub fn saved_roles(&self) -> &[SavedRole] {
        &self.saved_roles
    }

    /// Replaces the current session with a saved role's contents.
    pub fn restore_role(&mut self, id: &str) -> bool {
        let Some(saved) = self.saved_roles.iter().find(|s| s.id == id).cloned() else {
            return false;
        };
        self.map = saved.map;
        self.node_positions = saved.node_positions;
        self.drag.release();
        self.reconcile_overrides();
        true
    }

    pub fn remove_saved_role(&mut self, id: &str) -> bool {
        let before = self.saved_roles.len();
        self.saved_roles.retain(|s| s.id != id);
        self.saved_roles.len() != before
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Writes the session snapshot through the repository, assigning the
    /// session id on first save.
    pub async fn persist(&mut self) -> anyhow::Result<()> {
        let session_id = self
            .session_id
            .get_or_insert_with(id::session_id)
            .clone();
        let snapshot = RoleMapSnapshot {
            id: Some(session_id),
            map: self.map.clone(),
            node_positions: self.node_positions.clone(),
        };
        self.repository.save(&snapshot).await
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }
}
