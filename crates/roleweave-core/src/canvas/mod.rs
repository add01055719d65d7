//! Canvas interaction primitives shared by every workshop surface.
//!
//! The three screens (collaboration map, process canvas, experience board)
//! share one interaction vocabulary: drag a node to reposition it, click two
//! nodes to link them, and keep manually-placed positions sticky across
//! re-layouts. Each piece is a small, pure state machine so the shell only
//! has to feed it pointer coordinates.

pub mod drag;
pub mod linking;
pub mod overrides;

pub use drag::{DragState, DragUpdate};
pub use linking::{Connection, Connections, LinkSelection};
pub use overrides::PositionOverrides;
