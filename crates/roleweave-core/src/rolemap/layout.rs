//! Collaboration-map layout.
//!
//! Projects the role and its collaborators onto a fixed virtual canvas: the
//! role in the center, collaborators on a circle around it (first one at
//! 12 o'clock), a curved connector per collaborator carrying that
//! collaboration's task pills, and the role-only tasks stacked beside the
//! role node. The output is a plain scene description; drawing it is the
//! shell's job.

use crate::analysis::{palette_for, PaletteEntry};
use crate::canvas::PositionOverrides;
use crate::geometry::{curve_control, midpoint, radial_position, Point};
use crate::rolemap::{Frequency, RoleMap};

/// Virtual canvas width, both modes.
pub const CANVAS_WIDTH: f64 = 900.0;
/// Canvas height in compact mode.
pub const COMPACT_HEIGHT: f64 = 360.0;
/// Canvas height in expanded (full-screen) mode.
pub const EXPANDED_HEIGHT: f64 = 1100.0;
/// Distance of collaborator nodes from the role node.
pub const ORBIT_RADIUS: f64 = 150.0;
/// Perpendicular offset of connector control points.
pub const CURVE_OFFSET: f64 = 30.0;

/// Task pill dimensions along a connector.
pub const PILL_HEIGHT: f64 = 24.0;
/// Vertical gap between stacked pills.
pub const PILL_GAP: f64 = 10.0;

/// Horizontal offset of the solo-task stack from the role node.
pub const SOLO_STACK_OFFSET: f64 = 240.0;
/// Vertical spacing of the solo-task stack.
pub const SOLO_STACK_SPACING: f64 = 34.0;

/// Compact inline map or expanded full-screen map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapMode {
    #[default]
    Compact,
    Expanded,
}

/// The virtual canvas for a mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutFrame {
    pub width: f64,
    pub height: f64,
}

impl LayoutFrame {
    pub fn for_mode(mode: MapMode) -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: match mode {
                MapMode::Compact => COMPACT_HEIGHT,
                MapMode::Expanded => EXPANDED_HEIGHT,
            },
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A collaborator projected into canvas space.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    /// Stable node key (the collaborator id).
    pub key: String,
    pub name: String,
    pub position: Point,
}

/// A task pill rendered along a connector.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskPill {
    pub label: String,
    /// Pill center.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Palette entry of the matching pain point; `None` renders neutral.
    pub tint: Option<&'static PaletteEntry>,
}

/// The curved connector from the role to one collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// Key of the collaborator this connector reaches.
    pub key: String,
    pub from: Point,
    pub to: Point,
    /// Quadratic Bezier control point.
    pub control: Point,
    pub pills: Vec<TaskPill>,
}

/// A role-only task badge beside the role node, joined by a dashed line.
#[derive(Debug, Clone, PartialEq)]
pub struct SoloBadge {
    pub title: String,
    pub frequency: Frequency,
    pub position: Point,
}

/// Everything the shell needs to draw the collaboration map.
#[derive(Debug, Clone, PartialEq)]
pub struct CollaborationScene {
    pub frame: LayoutFrame,
    pub role_label: String,
    pub role_position: Point,
    pub nodes: Vec<PlacedNode>,
    pub connectors: Vec<Connector>,
    pub solo_badges: Vec<SoloBadge>,
}

/// Pill width for a label, matching the rendered text metrics.
fn pill_width(label: &str) -> f64 {
    (label.chars().count() as f64 * 7.0 + 28.0).max(60.0)
}

/// Pills for one collaborator's task list, stacked vertically around the
/// connector midpoint.
fn stack_pills(map: &RoleMap, tasks: &[String], mid: Point) -> Vec<TaskPill> {
    if tasks.is_empty() {
        return Vec::new();
    }
    let count = tasks.len() as f64;
    let total_height = count * PILL_HEIGHT + (count - 1.0) * PILL_GAP;
    let start_y = mid.y - total_height / 2.0;
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let tint = map
                .pain_points
                .iter()
                .find(|p| p.task == *task)
                .map(|p| palette_for(p.severity));
            TaskPill {
                label: task.clone(),
                position: Point::new(mid.x, start_y + i as f64 * (PILL_HEIGHT + PILL_GAP)),
                width: pill_width(task),
                height: PILL_HEIGHT,
                tint,
            }
        })
        .collect()
}

/// Builds the scene for the current store contents.
///
/// Computed radial positions are replaced wholesale by a manual override
/// when one exists for the node's key; overrides for removed collaborators
/// are expected to have been pruned already (see
/// [`PositionOverrides::prune`]).
pub fn build_scene(
    map: &RoleMap,
    overrides: &PositionOverrides,
    mode: MapMode,
) -> CollaborationScene {
    let frame = LayoutFrame::for_mode(mode);
    let center = frame.center();
    let count = map.collaborators.len();

    let nodes: Vec<PlacedNode> = map
        .collaborators
        .iter()
        .enumerate()
        .map(|(index, collaborator)| {
            let computed = radial_position(center, ORBIT_RADIUS, index, count.max(1));
            PlacedNode {
                key: collaborator.id.clone(),
                name: collaborator.name.clone(),
                position: overrides.get(&collaborator.id).unwrap_or(computed),
            }
        })
        .collect();

    let connectors: Vec<Connector> = nodes
        .iter()
        .zip(&map.collaborators)
        .map(|(node, collaborator)| {
            let mid = midpoint(center, node.position);
            Connector {
                key: node.key.clone(),
                from: center,
                to: node.position,
                control: curve_control(center, node.position, CURVE_OFFSET),
                pills: stack_pills(map, &collaborator.tasks, mid),
            }
        })
        .collect();

    let solo_count = map.solo_tasks.len() as f64;
    let solo_start = center.y - (solo_count - 1.0).max(0.0) * SOLO_STACK_SPACING / 2.0;
    let solo_badges: Vec<SoloBadge> = map
        .solo_tasks
        .iter()
        .enumerate()
        .map(|(i, task)| SoloBadge {
            title: task.title.clone(),
            frequency: task.frequency,
            position: Point::new(
                center.x - SOLO_STACK_OFFSET,
                solo_start + i as f64 * SOLO_STACK_SPACING,
            ),
        })
        .collect();

    CollaborationScene {
        frame,
        role_label: if map.role.name.trim().is_empty() {
            "Role".to_string()
        } else {
            map.role.name.clone()
        },
        role_position: center,
        nodes,
        connectors,
        solo_badges,
    }
}

/// The position a node currently renders at: its override if present,
/// otherwise its computed radial slot. `None` for unknown keys.
pub fn node_position(
    map: &RoleMap,
    overrides: &PositionOverrides,
    mode: MapMode,
    key: &str,
) -> Option<Point> {
    if let Some(position) = overrides.get(key) {
        return Some(position);
    }
    let center = LayoutFrame::for_mode(mode).center();
    let count = map.collaborators.len();
    map.collaborators
        .iter()
        .position(|c| c.id == key)
        .map(|index| radial_position(center, ORBIT_RADIUS, index, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolemap::{DurationUnit, PainPoint};

    fn map_with(names: &[&str]) -> (RoleMap, Vec<String>) {
        let mut map = RoleMap::new();
        let ids = names
            .iter()
            .map(|n| map.add_collaborator(n).unwrap())
            .collect();
        (map, ids)
    }

    #[test]
    fn test_first_collaborator_sits_at_twelve_oclock() {
        let (map, ids) = map_with(&["A", "B", "C", "D"]);
        let scene = build_scene(&map, &PositionOverrides::new(), MapMode::Compact);
        let center = scene.frame.center();
        assert_eq!(scene.role_position, center);
        let first = scene.nodes.iter().find(|n| n.key == ids[0]).unwrap();
        assert!((first.position.x - center.x).abs() < 1e-9);
        assert!((first.position.y - (center.y - ORBIT_RADIUS)).abs() < 1e-9);
    }

    #[test]
    fn test_override_replaces_computed_position() {
        let (map, ids) = map_with(&["A", "B"]);
        let mut overrides = PositionOverrides::new();
        overrides.set(ids[0].clone(), Point::new(50.0, 60.0));
        let scene = build_scene(&map, &overrides, MapMode::Compact);
        let moved = scene.nodes.iter().find(|n| n.key == ids[0]).unwrap();
        assert_eq!(moved.position, Point::new(50.0, 60.0));
        // The connector follows the override too.
        let connector = scene.connectors.iter().find(|c| c.key == ids[0]).unwrap();
        assert_eq!(connector.to, Point::new(50.0, 60.0));
    }

    #[test]
    fn test_expanded_frame_is_taller() {
        let compact = LayoutFrame::for_mode(MapMode::Compact);
        let expanded = LayoutFrame::for_mode(MapMode::Expanded);
        assert_eq!(compact.width, expanded.width);
        assert_eq!(compact.height, COMPACT_HEIGHT);
        assert_eq!(expanded.height, EXPANDED_HEIGHT);
    }

    #[test]
    fn test_pills_stack_around_connector_midpoint() {
        let (mut map, ids) = map_with(&["A"]);
        map.add_task_to_collaborator(&ids[0], "One");
        map.add_task_to_collaborator(&ids[0], "Two");
        let scene = build_scene(&map, &PositionOverrides::new(), MapMode::Compact);
        let pills = &scene.connectors[0].pills;
        assert_eq!(pills.len(), 2);
        let spacing = pills[1].position.y - pills[0].position.y;
        assert!((spacing - (PILL_HEIGHT + PILL_GAP)).abs() < 1e-9);
        let mid = midpoint(scene.role_position, scene.nodes[0].position);
        let pill_mid_y = (pills[0].position.y + pills[1].position.y) / 2.0;
        assert!((pill_mid_y - (mid.y - PILL_HEIGHT / 2.0)).abs() < 1e-9);
        assert!(pills.iter().all(|p| p.position.x == mid.x));
    }

    #[test]
    fn test_pill_tint_matches_pain_point_by_task_name() {
        let (mut map, ids) = map_with(&["A"]);
        map.add_task_to_collaborator(&ids[0], "Planning");
        map.add_task_to_collaborator(&ids[0], "Review");
        map.record_pain_point(PainPoint {
            task: "Planning".into(),
            severity: 4,
            duration_value: 30.0,
            duration_unit: DurationUnit::Minutes,
            ..PainPoint::default()
        });
        let scene = build_scene(&map, &PositionOverrides::new(), MapMode::Compact);
        let pills = &scene.connectors[0].pills;
        let planning = pills.iter().find(|p| p.label == "Planning").unwrap();
        let review = pills.iter().find(|p| p.label == "Review").unwrap();
        assert_eq!(planning.tint.unwrap().fill, "#d13438");
        assert!(review.tint.is_none());
    }

    #[test]
    fn test_pill_width_has_floor() {
        assert_eq!(pill_width("ab"), 60.0);
        assert_eq!(pill_width("a sizeable task name"), 20.0 * 7.0 + 28.0);
    }

    #[test]
    fn test_solo_badges_stack_beside_role() {
        let mut map = RoleMap::new();
        map.add_solo_task("Reconciliation", Frequency::Daily);
        map.add_solo_task("Reporting", Frequency::Weekly);
        let scene = build_scene(&map, &PositionOverrides::new(), MapMode::Compact);
        let center = scene.frame.center();
        assert_eq!(scene.solo_badges.len(), 2);
        assert!(scene
            .solo_badges
            .iter()
            .all(|b| b.position.x == center.x - SOLO_STACK_OFFSET));
        let spacing = scene.solo_badges[1].position.y - scene.solo_badges[0].position.y;
        assert!((spacing - SOLO_STACK_SPACING).abs() < 1e-9);
    }

    #[test]
    fn test_node_position_prefers_override() {
        let (map, ids) = map_with(&["A", "B"]);
        let mut overrides = PositionOverrides::new();
        assert!(node_position(&map, &overrides, MapMode::Compact, &ids[1]).is_some());
        overrides.set(ids[1].clone(), Point::new(9.0, 9.0));
        assert_eq!(
            node_position(&map, &overrides, MapMode::Compact, &ids[1]),
            Some(Point::new(9.0, 9.0))
        );
        assert!(node_position(&map, &overrides, MapMode::Compact, "missing").is_none());
    }
}
