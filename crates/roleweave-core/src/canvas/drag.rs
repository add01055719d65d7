//! Pointer-drag state machine.

use crate::geometry::Point;

/// A position update produced while a drag is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct DragUpdate {
    /// Stable key of the node being dragged.
    pub key: String,
    /// The node's new canvas-local position.
    pub position: Point,
}

/// The drag lifecycle of a single canvas.
///
/// `Idle -> Dragging(key, grab offset) -> Idle`. The grab offset is captured
/// on press so the node does not jump under the pointer; the position emitted
/// on every move is a pure function of the current pointer position, so a
/// drag that returns to its starting point restores the starting position
/// exactly. The caller owns pointer capture and must call [`DragState::release`]
/// on every exit path (pointer up and pointer leave alike).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { key: String, grab_offset: Point },
}

impl DragState {
    /// Begins a drag on the node under the pointer.
    ///
    /// `node_position` is where the node currently renders (override if
    /// present, computed layout position otherwise), in canvas-local
    /// coordinates; `pointer` is the pointer in the same space.
    pub fn press(&mut self, key: impl Into<String>, pointer: Point, node_position: Point) {
        *self = DragState::Dragging {
            key: key.into(),
            grab_offset: pointer - node_position,
        };
    }

    /// Translates a pointer move into a node position update.
    ///
    /// Returns `None` while idle, so stray moves between drags are ignored.
    pub fn drag(&self, pointer: Point) -> Option<DragUpdate> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { key, grab_offset } => Some(DragUpdate {
                key: key.clone(),
                position: pointer - *grab_offset,
            }),
        }
    }

    /// Ends the drag, whatever state it is in.
    pub fn release(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Key of the node currently being dragged, if any.
    pub fn active_key(&self) -> Option<&str> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { key, .. } => Some(key),
        }
    }
}
