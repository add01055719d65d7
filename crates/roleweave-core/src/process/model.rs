//! Process-map domain model.
//!
//! A process map is a free-position canvas of typed steps joined by directed
//! connections, plus lightweight pain points that can reference a step.
//! Every step type carries a fixed metadata field list and an instance cap,
//! enforced at creation time only.

use crate::canvas::Connections;
use crate::geometry::{clamp_zoom, midpoint, Point};
use crate::id;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vertical lift of a connection's curve control point above the chord
/// midpoint.
pub const CONNECTION_LIFT: f64 = 16.0;

/// Virtual canvas size of the process map.
pub const CANVAS_WIDTH: f64 = 1400.0;
pub const CANVAS_HEIGHT: f64 = 900.0;

/// One named free-text metadata field of a step type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaField {
    pub key: &'static str,
    pub label: &'static str,
}

/// The fixed set of step kinds a process map is built from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Swimlane,
    Trigger,
    #[default]
    Action,
    Decision,
    Parallel,
    Handoff,
    End,
    Exception,
    Wait,
}

impl StepType {
    pub const ALL: [StepType; 9] = [
        StepType::Swimlane,
        StepType::Trigger,
        StepType::Action,
        StepType::Decision,
        StepType::Parallel,
        StepType::Handoff,
        StepType::End,
        StepType::Exception,
        StepType::Wait,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StepType::Swimlane => "swimlane",
            StepType::Trigger => "trigger",
            StepType::Action => "action",
            StepType::Decision => "decision",
            StepType::Parallel => "parallel",
            StepType::Handoff => "handoff",
            StepType::End => "end",
            StepType::Exception => "exception",
            StepType::Wait => "wait",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepType::Swimlane => "Swimlane",
            StepType::Trigger => "Trigger",
            StepType::Action => "Action",
            StepType::Decision => "Decision",
            StepType::Parallel => "Parallel",
            StepType::Handoff => "Handoff",
            StepType::End => "End",
            StepType::Exception => "Exception",
            StepType::Wait => "Wait",
        }
    }

    /// Display color of the step glyph.
    pub fn color(&self) -> &'static str {
        match self {
            StepType::Swimlane => "#111827",
            StepType::Trigger => "#22c55e",
            StepType::Action => "#2563eb",
            StepType::Decision => "#facc15",
            StepType::Parallel => "#7c3aed",
            StepType::Handoff => "#fbbf24",
            StepType::End => "#ef4444",
            StepType::Exception => "#e11d48",
            StepType::Wait => "#6b7280",
        }
    }

    /// Maximum number of live instances of this type on one map.
    pub fn limit(&self) -> usize {
        match self {
            StepType::Swimlane => 6,
            StepType::Trigger => 4,
            StepType::Action => 10,
            StepType::Decision => 6,
            StepType::Parallel => 4,
            StepType::Handoff => 4,
            StepType::End => 4,
            StepType::Exception => 6,
            StepType::Wait => 4,
        }
    }

    /// The type's metadata fields, in display order.
    pub fn fields(&self) -> &'static [MetaField] {
        match self {
            StepType::Swimlane => &[
                MetaField { key: "role", label: "Role name" },
                MetaField { key: "department", label: "Department" },
            ],
            StepType::Trigger => &[
                MetaField { key: "description", label: "What starts the process?" },
                MetaField { key: "source", label: "Source system or actor" },
            ],
            StepType::Action => &[
                MetaField { key: "description", label: "Action description" },
                MetaField { key: "owner", label: "Owner" },
                MetaField { key: "tool", label: "System / tool used" },
            ],
            StepType::Decision => &[
                MetaField { key: "question", label: "Question / condition" },
                MetaField { key: "outcomes", label: "Possible outcomes" },
            ],
            StepType::Parallel => &[
                MetaField { key: "tasks", label: "Parallel tasks" },
                MetaField { key: "roles", label: "Roles involved" },
            ],
            StepType::Handoff => &[
                MetaField { key: "from", label: "From role" },
                MetaField { key: "to", label: "To role" },
                MetaField { key: "trigger", label: "Trigger condition" },
            ],
            StepType::End => &[
                MetaField { key: "description", label: "End state description" },
                MetaField { key: "artifact", label: "Output artifact" },
            ],
            StepType::Exception => &[
                MetaField { key: "type", label: "Exception type" },
                MetaField { key: "resolution", label: "Resolution path" },
            ],
            StepType::Wait => &[
                MetaField { key: "time", label: "Time" },
                MetaField { key: "description", label: "Description" },
            ],
        }
    }
}

/// A placed process step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: String,
    pub step_type: StepType,
    /// Display label, initialized to the type label and editable.
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub notes: String,
    /// Values of the type's metadata fields, keyed by field key.
    pub meta: BTreeMap<String, String>,
}

impl ProcessStep {
    pub fn new(step_type: StepType, at: Point) -> Self {
        let meta = step_type
            .fields()
            .iter()
            .map(|f| (f.key.to_string(), String::new()))
            .collect();
        Self {
            id: id::record_id(step_type.key()),
            step_type,
            name: step_type.label().to_string(),
            x: at.x,
            y: at.y,
            notes: String::new(),
            meta,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, at: Point) {
        self.x = at.x;
        self.y = at.y;
    }

    /// Rebuilds `meta` against the type's field list: known keys keep their
    /// stored value, missing keys default to empty, unknown keys are dropped.
    /// Applied to loaded snapshots so older blobs stay forward-compatible.
    pub fn normalize_meta(&mut self) {
        let mut normalized = BTreeMap::new();
        for field in self.step_type.fields() {
            let value = self.meta.remove(field.key).unwrap_or_default();
            normalized.insert(field.key.to_string(), value);
        }
        self.meta = normalized;
    }
}

/// Identifying details of the mapped process.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Assigned on first save.
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub business_unit: String,
}

/// A friction item recorded against the process, optionally tied to a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessPainPoint {
    pub id: String,
    pub title: String,
    pub step_id: Option<String>,
    pub severity: u8,
    pub description: String,
}

/// The curve geometry of one live connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionCurve {
    pub id: String,
    pub from: Point,
    pub to: Point,
    pub control: Point,
}

/// The process-canvas aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMap {
    pub info: ProcessInfo,
    pub steps: Vec<ProcessStep>,
    pub connections: Connections,
    pub pain_points: Vec<ProcessPainPoint>,
    pub zoom: f64,
}

impl Default for ProcessMap {
    fn default() -> Self {
        Self {
            info: ProcessInfo::default(),
            steps: Vec::new(),
            connections: Connections::new(),
            pain_points: Vec::new(),
            zoom: 1.0,
        }
    }
}

impl ProcessMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live instance counts per step type.
    pub fn type_counts(&self) -> BTreeMap<StepType, usize> {
        let mut counts = BTreeMap::new();
        for step in &self.steps {
            *counts.entry(step.step_type).or_insert(0) += 1;
        }
        counts
    }

    /// How many more instances of `step_type` may be created.
    pub fn remaining_capacity(&self, step_type: StepType) -> usize {
        let used = self
            .steps
            .iter()
            .filter(|s| s.step_type == step_type)
            .count();
        step_type.limit().saturating_sub(used)
    }

    /// Places a new step of `step_type` at a canvas-local position.
    ///
    /// A no-op returning `None` when the type's cap is reached.
    pub fn add_step_at(&mut self, step_type: StepType, at: Point) -> Option<&ProcessStep> {
        if self.remaining_capacity(step_type) == 0 {
            return None;
        }
        self.steps.push(ProcessStep::new(step_type, at));
        self.steps.last()
    }

    pub fn step(&self, id: &str) -> Option<&ProcessStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    fn step_mut(&mut self, id: &str) -> Option<&mut ProcessStep> {
        self.steps.iter_mut().find(|s| s.id == id)
    }

    /// Removes a step and cascades: its connections and its linked pain
    /// points go with it.
    pub fn remove_step(&mut self, id: &str) -> bool {
        let before = self.steps.len();
        self.steps.retain(|s| s.id != id);
        if self.steps.len() == before {
            return false;
        }
        self.connections.remove_endpoint(id);
        self.pain_points.retain(|p| p.step_id.as_deref() != Some(id));
        true
    }

    pub fn move_step(&mut self, id: &str, to: Point) -> bool {
        match self.step_mut(id) {
            Some(step) => {
                step.set_position(to);
                true
            }
            None => false,
        }
    }

    pub fn rename_step(&mut self, id: &str, name: &str) -> bool {
        match self.step_mut(id) {
            Some(step) => {
                step.name = name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_step_notes(&mut self, id: &str, notes: &str) -> bool {
        match self.step_mut(id) {
            Some(step) => {
                step.notes = notes.to_string();
                true
            }
            None => false,
        }
    }

    /// Sets one metadata field; unknown keys for the step's type are
    /// rejected.
    pub fn set_step_meta(&mut self, id: &str, key: &str, value: &str) -> bool {
        let Some(step) = self.step_mut(id) else {
            return false;
        };
        if !step.step_type.fields().iter().any(|f| f.key == key) {
            return false;
        }
        step.meta.insert(key.to_string(), value.to_string());
        true
    }

    /// Connects two steps; duplicate (from, to) pairs are silently dropped.
    pub fn link(&mut self, from: &str, to: &str) -> bool {
        self.connections.connect(from, to)
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = clamp_zoom(zoom);
    }

    pub fn nudge_zoom(&mut self, delta: f64) {
        self.set_zoom(self.zoom + delta);
    }

    /// Records a pain point; blank titles are silently ignored.
    pub fn record_pain_point(
        &mut self,
        title: &str,
        step_id: Option<&str>,
        severity: u8,
        description: &str,
    ) -> Option<&ProcessPainPoint> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.pain_points.push(ProcessPainPoint {
            id: id::session_id(),
            title: trimmed.to_string(),
            step_id: step_id.filter(|s| !s.is_empty()).map(|s| s.to_string()),
            severity,
            description: description.trim().to_string(),
        });
        self.pain_points.last()
    }

    pub fn remove_pain_point(&mut self, id: &str) -> bool {
        let before = self.pain_points.len();
        self.pain_points.retain(|p| p.id != id);
        self.pain_points.len() != before
    }

    /// Curve geometry for every connection whose endpoints still exist.
    /// Connections referencing a removed step are skipped, not drawn.
    pub fn connection_curves(&self) -> Vec<ConnectionCurve> {
        self.connections
            .iter()
            .filter_map(|conn| {
                let from = self.step(&conn.from)?.position();
                let to = self.step(&conn.to)?.position();
                let mid = midpoint(from, to);
                Some(ConnectionCurve {
                    id: conn.id.clone(),
                    from,
                    to,
                    control: Point::new(mid.x, mid.y - CONNECTION_LIFT),
                })
            })
            .collect()
    }

    /// Wipes the canvas (steps, connections, pain points). Process info and
    /// zoom survive.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.connections.clear();
        self.pain_points.clear();
    }
}
