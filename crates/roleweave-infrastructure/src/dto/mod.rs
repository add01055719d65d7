//! Snapshot DTOs.
//!
//! One versioned DTO per screen, matching the JSON the sessions were
//! historically stored with (camelCase keys, `type` discriminators). Every
//! field defaults independently so a partial blob from an older writer
//! still loads, with the missing pieces defaulted. Conversions to domain
//! types renormalize whatever needs it (step metadata, zoom range,
//! friction-tag caps).

pub mod experience_session;
pub mod process_session;
pub mod role_map_session;

use roleweave_core::canvas::Connection;
use serde::{Deserialize, Serialize};

pub use experience_session::ExperienceSessionV1;
pub use process_session::ProcessSessionV1;
pub use role_map_session::RoleMapSessionV1;

/// A directed edge on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionDto {
    pub id: String,
    pub from: String,
    pub to: String,
}

impl From<ConnectionDto> for Connection {
    fn from(dto: ConnectionDto) -> Self {
        Connection {
            id: dto.id,
            from: dto.from,
            to: dto.to,
        }
    }
}

impl From<&Connection> for ConnectionDto {
    fn from(connection: &Connection) -> Self {
        ConnectionDto {
            id: connection.id.clone(),
            from: connection.from.clone(),
            to: connection.to.clone(),
        }
    }
}
