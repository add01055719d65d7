//! Core domain of the Roleweave workshop engine.
//!
//! Three surfaces share this crate: the role mapper (role, collaborators,
//! shared tasks/tools, pain points, radial collaboration map), the process
//! canvas (typed steps with instance caps), and the experience board (typed
//! cards). The canvas interaction primitives, the derived-data engine, and
//! the persistence-port traits all live here; storage implementations live
//! in `roleweave-infrastructure`, screen services in
//! `roleweave-application`.

pub mod analysis;
pub mod canvas;
pub mod config;
pub mod error;
pub mod experience;
pub mod geometry;
pub mod id;
pub mod process;
pub mod rolemap;

// Re-export common error type
pub use error::RoleweaveError;
