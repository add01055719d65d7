//! Role-mapper session DTO.

use roleweave_core::canvas::PositionOverrides;
use roleweave_core::rolemap::{
    Collaborator, DurationUnit, Frequency, FrictionType, PainPoint, RoleMap, RoleMapSnapshot,
    RoleProfile, SoloTask, MAX_FRICTION_TYPES,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The stored shape of one role-mapper session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleMapSessionV1 {
    pub id: Option<String>,
    pub role_info: RoleInfoDto,
    pub goals: Vec<String>,
    pub tools: Vec<String>,
    pub solo_tasks: Vec<SoloTaskDto>,
    pub collaborators: Vec<CollaboratorDto>,
    pub pain_points: Vec<RolePainPointDto>,
    pub node_positions: PositionOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleInfoDto {
    pub name: String,
    pub headcount: Option<u32>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoloTaskDto {
    pub title: String,
    pub frequency: Frequency,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollaboratorDto {
    pub id: String,
    pub name: String,
    pub tasks: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RolePainPointDto {
    pub title: String,
    pub task: String,
    pub severity: u8,
    pub delay: String,
    pub cost: String,
    pub description: String,
    pub frequency: Frequency,
    pub duration_value: f64,
    pub duration_unit: DurationUnit,
    pub friction_types: Vec<FrictionType>,
}

impl RoleMapSessionV1 {
    /// Converts the stored blob into the domain snapshot. Collaborators from
    /// blobs written before ids existed get a fresh one; friction tags are
    /// re-capped; a pain point stored with only a title falls back to it as
    /// its task anchor.
    pub fn into_domain(self) -> RoleMapSnapshot {
        let collaborators = self
            .collaborators
            .into_iter()
            .map(|dto| Collaborator {
                // Blobs written before collaborators carried ids get one.
                id: if dto.id.is_empty() {
                    Uuid::new_v4().to_string()
                } else {
                    dto.id
                },
                name: dto.name,
                tasks: dto.tasks,
                tools: dto.tools,
            })
            .collect();

        let pain_points = self
            .pain_points
            .into_iter()
            .map(|dto| {
                let task = if dto.task.is_empty() {
                    dto.title.clone()
                } else {
                    dto.task
                };
                let mut friction_types = dto.friction_types;
                friction_types.truncate(MAX_FRICTION_TYPES);
                PainPoint {
                    title: dto.title,
                    task,
                    severity: dto.severity,
                    delay: dto.delay,
                    cost: dto.cost,
                    description: dto.description,
                    frequency: dto.frequency,
                    duration_value: dto.duration_value,
                    duration_unit: dto.duration_unit,
                    friction_types,
                }
            })
            .collect();

        RoleMapSnapshot {
            id: self.id,
            map: RoleMap {
                role: RoleProfile {
                    name: self.role_info.name,
                    headcount: self.role_info.headcount,
                    description: self.role_info.description,
                },
                goals: self.goals,
                tools: self.tools,
                solo_tasks: self
                    .solo_tasks
                    .into_iter()
                    .map(|dto| SoloTask {
                        title: dto.title,
                        frequency: dto.frequency,
                    })
                    .collect(),
                collaborators,
                pain_points,
            },
            node_positions: self.node_positions,
        }
    }
}

impl From<&RoleMapSnapshot> for RoleMapSessionV1 {
    fn from(snapshot: &RoleMapSnapshot) -> Self {
        let map = &snapshot.map;
        Self {
            id: snapshot.id.clone(),
            role_info: RoleInfoDto {
                name: map.role.name.clone(),
                headcount: map.role.headcount,
                description: map.role.description.clone(),
            },
            goals: map.goals.clone(),
            tools: map.tools.clone(),
            solo_tasks: map
                .solo_tasks
                .iter()
                .map(|task| SoloTaskDto {
                    title: task.title.clone(),
                    frequency: task.frequency,
                })
                .collect(),
            collaborators: map
                .collaborators
                .iter()
                .map(|c| CollaboratorDto {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    tasks: c.tasks.clone(),
                    tools: c.tools.clone(),
                })
                .collect(),
            pain_points: map
                .pain_points
                .iter()
                .map(|pain| RolePainPointDto {
                    title: pain.title.clone(),
                    task: pain.task.clone(),
                    severity: pain.severity,
                    delay: pain.delay.clone(),
                    cost: pain.cost.clone(),
                    description: pain.description.clone(),
                    frequency: pain.frequency,
                    duration_value: pain.duration_value,
                    duration_unit: pain.duration_unit,
                    friction_types: pain.friction_types.clone(),
                })
                .collect(),
            node_positions: snapshot.node_positions.clone(),
        }
    }
}
