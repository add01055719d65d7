//! Process-canvas session DTO.

use super::ConnectionDto;
use roleweave_core::canvas::Connections;
use roleweave_core::geometry::clamp_zoom;
use roleweave_core::process::{ProcessInfo, ProcessMap, ProcessPainPoint, ProcessStep, StepType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The stored shape of one process-canvas session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessSessionV1 {
    pub id: Option<String>,
    pub steps: Vec<ProcessStepDto>,
    pub connections: Vec<ConnectionDto>,
    pub process_info: ProcessInfoDto,
    pub pain_points: Vec<ProcessPainPointDto>,
    pub zoom: f64,
}

impl Default for ProcessSessionV1 {
    fn default() -> Self {
        Self {
            id: None,
            steps: Vec::new(),
            connections: Vec::new(),
            process_info: ProcessInfoDto::default(),
            pain_points: Vec::new(),
            zoom: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessStepDto {
    pub id: String,
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub notes: String,
    pub meta: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessInfoDto {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub business_unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessPainPointDto {
    pub id: String,
    pub title: String,
    pub step_id: Option<String>,
    pub severity: u8,
    pub description: String,
}

impl ProcessSessionV1 {
    /// Converts the stored blob into the domain aggregate, renormalizing
    /// step metadata against each type's field list and the zoom against its
    /// supported range.
    pub fn into_domain(self) -> ProcessMap {
        let steps = self
            .steps
            .into_iter()
            .map(|dto| {
                let mut step = ProcessStep {
                    id: dto.id,
                    step_type: dto.step_type,
                    name: dto.name,
                    x: dto.x,
                    y: dto.y,
                    notes: dto.notes,
                    meta: dto.meta,
                };
                step.normalize_meta();
                step
            })
            .collect();

        let connections: Connections = self
            .connections
            .into_iter()
            .map(Into::into)
            .collect();

        let pain_points = self
            .pain_points
            .into_iter()
            .map(|dto| ProcessPainPoint {
                id: dto.id,
                title: dto.title,
                step_id: dto.step_id.filter(|s| !s.is_empty()),
                severity: dto.severity,
                description: dto.description,
            })
            .collect();

        // A zero or garbage zoom in an old blob falls back to 1:1.
        let zoom = if self.zoom.is_finite() && self.zoom > 0.0 {
            clamp_zoom(self.zoom)
        } else {
            1.0
        };

        ProcessMap {
            info: ProcessInfo {
                id: self.process_info.id.or(self.id),
                name: self.process_info.name,
                description: self.process_info.description,
                business_unit: self.process_info.business_unit,
            },
            steps,
            connections,
            pain_points,
            zoom,
        }
    }
}

impl From<&ProcessMap> for ProcessSessionV1 {
    fn from(map: &ProcessMap) -> Self {
        Self {
            id: map.info.id.clone(),
            steps: map
                .steps
                .iter()
                .map(|step| ProcessStepDto {
                    id: step.id.clone(),
                    step_type: step.step_type,
                    name: step.name.clone(),
                    x: step.x,
                    y: step.y,
                    notes: step.notes.clone(),
                    meta: step.meta.clone(),
                })
                .collect(),
            connections: map.connections.iter().map(Into::into).collect(),
            process_info: ProcessInfoDto {
                id: map.info.id.clone(),
                name: map.info.name.clone(),
                description: map.info.description.clone(),
                business_unit: map.info.business_unit.clone(),
            },
            pain_points: map
                .pain_points
                .iter()
                .map(|pain| ProcessPainPointDto {
                    id: pain.id.clone(),
                    title: pain.title.clone(),
                    step_id: pain.step_id.clone(),
                    severity: pain.severity,
                    description: pain.description.clone(),
                })
                .collect(),
            zoom: map.zoom,
        }
    }
}
