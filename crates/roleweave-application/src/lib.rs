//! Application layer of the Roleweave workshop engine.
//!
//! One service per workshop screen, coordinating the domain state in
//! `roleweave-core` with the snapshot repositories in
//! `roleweave-infrastructure`. Services own all interaction state (drag,
//! pending links, selection) so the shell stays stateless.

pub mod bootstrap;
pub mod experience_board_service;
pub mod process_canvas_service;
pub mod role_mapper_service;

pub use bootstrap::{open_experience_board, open_process_canvas, open_role_mapper};
pub use experience_board_service::ExperienceBoardService;
pub use process_canvas_service::{MenuEntry, ProcessCanvasService};
pub use role_mapper_service::{RoleMapperService, SavedRole};
