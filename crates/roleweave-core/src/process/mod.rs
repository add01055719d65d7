//! Process-canvas domain: typed steps, connections, and the persistence
//! port.

pub mod model;
pub mod repository;

pub use model::{
    ConnectionCurve, MetaField, ProcessInfo, ProcessMap, ProcessPainPoint, ProcessStep, StepType,
    CANVAS_HEIGHT, CANVAS_WIDTH, CONNECTION_LIFT,
};
pub use repository::ProcessMapRepository;
