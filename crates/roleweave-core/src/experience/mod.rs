//! Experience-board domain: typed cards, canvas nodes, and the persistence
//! port.

pub mod model;
pub mod repository;

pub use model::{
    BoardNode, CardType, ConnectionLine, ExperienceBoard, ExperienceCard, ExperienceInfo,
    GRID_COLUMNS, GRID_ORIGIN_X, GRID_ORIGIN_Y, GRID_STEP_X, GRID_STEP_Y,
};
pub use repository::ExperienceBoardRepository;
