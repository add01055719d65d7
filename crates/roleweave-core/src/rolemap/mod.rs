//! Role-mapper domain: the store, the collaboration-map layout, and the
//! persistence port.

pub mod layout;
pub mod model;
pub mod repository;

pub use layout::{
    build_scene, node_position, CollaborationScene, Connector, LayoutFrame, MapMode, PlacedNode,
    SoloBadge, TaskPill,
};
pub use model::{
    parse_duration_value, parse_headcount, Collaborator, DurationUnit, Frequency, FrictionType,
    PainPoint, RoleMap, RoleProfile, RoleSummary, SoloTask, MAX_FRICTION_TYPES,
};
pub use repository::{RoleMapSnapshot, RoleMapSnapshotRepository};
