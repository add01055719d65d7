//! Role-mapper domain model.
//!
//! One workshop session captures a single role: who it collaborates with,
//! which tasks and tools those collaborations share, the tasks the role owns
//! alone, its goals, and the recorded pain points. Everything is created by
//! explicit add actions, mutated in place, and removed by explicit deletes;
//! nothing expires on its own.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How often a task or pain point occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
    Adhoc,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Adhoc,
    ];

    /// Occurrences per week used for time-loss estimates.
    pub fn weekly_occurrences(&self) -> f64 {
        match self {
            Frequency::Daily => 5.0,
            Frequency::Weekly => 1.0,
            Frequency::Monthly => 0.25,
            Frequency::Adhoc => 0.0,
        }
    }

    /// Occurrences per month used for time-loss estimates.
    pub fn monthly_occurrences(&self) -> f64 {
        match self {
            Frequency::Daily => 22.0,
            Frequency::Weekly => 4.35,
            Frequency::Monthly => 1.0,
            Frequency::Adhoc => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Adhoc => "adhoc",
        }
    }
}

/// Unit of a pain point's per-occurrence duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Minutes,
    Hours,
}

impl DurationUnit {
    /// Minutes represented by one unit.
    pub fn minutes_per_unit(&self) -> f64 {
        match self {
            DurationUnit::Minutes => 1.0,
            DurationUnit::Hours => 60.0,
        }
    }
}

/// Friction categories a pain point can be tagged with (at most
/// [`MAX_FRICTION_TYPES`] per pain point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrictionType {
    Delay,
    Rework,
    ManualEffort,
    DecisionBottleneck,
    HandoverFriction,
    ToolMismatch,
    ComplianceBurden,
}

impl FrictionType {
    pub const ALL: [FrictionType; 7] = [
        FrictionType::Delay,
        FrictionType::Rework,
        FrictionType::ManualEffort,
        FrictionType::DecisionBottleneck,
        FrictionType::HandoverFriction,
        FrictionType::ToolMismatch,
        FrictionType::ComplianceBurden,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FrictionType::Delay => "Delay",
            FrictionType::Rework => "Rework",
            FrictionType::ManualEffort => "Manual effort",
            FrictionType::DecisionBottleneck => "Decision bottleneck",
            FrictionType::HandoverFriction => "Handover friction",
            FrictionType::ToolMismatch => "Tool mismatch",
            FrictionType::ComplianceBurden => "Compliance/control burden",
        }
    }

    /// One-line facilitation hint shown next to the label.
    pub fn hint(&self) -> &'static str {
        match self {
            FrictionType::Delay => "waiting for info, approvals, input",
            FrictionType::Rework => "fixing errors, re-doing work",
            FrictionType::ManualEffort => "copy/paste, chasing info",
            FrictionType::DecisionBottleneck => "waiting for judgement",
            FrictionType::HandoverFriction => "cross-team dependencies",
            FrictionType::ToolMismatch => "wrong or missing system",
            FrictionType::ComplianceBurden => "over-checking, audit steps",
        }
    }
}

/// Maximum number of friction tags per pain point.
pub const MAX_FRICTION_TYPES: usize = 2;

/// A repetitive task owned by the role alone, with no collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoloTask {
    pub title: String,
    pub frequency: Frequency,
}

/// A collaborator of the mapped role.
///
/// The `id` is assigned at creation and is the node key on the collaboration
/// map; two collaborators may share a display name without colliding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: String,
    pub name: String,
    /// Tasks shared between the role and this collaborator. Duplicates are
    /// allowed; the overlap analysis counts owners, not entries.
    pub tasks: Vec<String>,
    /// Tools this collaborator uses, deduplicated on insert.
    pub tools: Vec<String>,
}

impl Collaborator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            tasks: Vec::new(),
            tools: Vec::new(),
        }
    }
}

/// A recorded friction item tied to a task.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PainPoint {
    /// Display title; mirrors `task`.
    pub title: String,
    /// Task the pain is tied to. May or may not match an existing
    /// collaborator task or solo task.
    pub task: String,
    /// Severity 1-5 as entered; clamped only at palette lookup.
    pub severity: u8,
    pub delay: String,
    pub cost: String,
    pub description: String,
    pub frequency: Frequency,
    /// Duration per occurrence; malformed input parses to 0.
    pub duration_value: f64,
    pub duration_unit: DurationUnit,
    pub friction_types: Vec<FrictionType>,
}

impl PainPoint {
    /// Minutes lost per single occurrence.
    pub fn per_occurrence_minutes(&self) -> f64 {
        self.duration_value * self.duration_unit.minutes_per_unit()
    }
}

/// Basics of the role being mapped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    pub headcount: Option<u32>,
    pub description: String,
}

/// Read-only summary of a session, with placeholders for unset fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSummary {
    pub role: String,
    pub headcount: String,
    pub description: String,
    pub goals: Vec<String>,
    pub tools: Vec<String>,
    pub collaborators: Vec<String>,
    pub pain_point_count: usize,
}

/// Parses a duration field; anything that is not a non-negative number
/// becomes 0 (a comfort behavior, not a validation contract).
pub fn parse_duration_value(input: &str) -> f64 {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(0.0)
}

/// Parses a headcount field; malformed input leaves it unset.
pub fn parse_headcount(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// The mutable store behind the role-mapper screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoleMap {
    pub role: RoleProfile,
    pub goals: Vec<String>,
    /// Role-level tools; shares a namespace with collaborator tools for
    /// overlap detection.
    pub tools: Vec<String>,
    pub solo_tasks: Vec<SoloTask>,
    pub collaborators: Vec<Collaborator>,
    pub pain_points: Vec<PainPoint>,
}

impl RoleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a goal; blank input is silently ignored.
    pub fn add_goal(&mut self, goal: &str) -> bool {
        let trimmed = goal.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.goals.push(trimmed.to_string());
        true
    }

    pub fn remove_goal(&mut self, index: usize) {
        if index < self.goals.len() {
            self.goals.remove(index);
        }
    }

    /// Adds a role-level tool; blank input and duplicates are ignored.
    pub fn add_tool(&mut self, tool: &str) -> bool {
        let trimmed = tool.trim();
        if trimmed.is_empty() || self.tools.iter().any(|t| t == trimmed) {
            return false;
        }
        self.tools.push(trimmed.to_string());
        true
    }

    pub fn remove_tool(&mut self, index: usize) {
        if index < self.tools.len() {
            self.tools.remove(index);
        }
    }

    /// Adds an individual task; blank titles are silently ignored.
    pub fn add_solo_task(&mut self, title: &str, frequency: Frequency) -> bool {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.solo_tasks.push(SoloTask {
            title: trimmed.to_string(),
            frequency,
        });
        true
    }

    pub fn remove_solo_task(&mut self, index: usize) {
        if index < self.solo_tasks.len() {
            self.solo_tasks.remove(index);
        }
    }

    /// Adds a collaborator and returns its id; blank names are ignored.
    pub fn add_collaborator(&mut self, name: &str) -> Option<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        let collaborator = Collaborator::new(trimmed);
        let id = collaborator.id.clone();
        self.collaborators.push(collaborator);
        Some(id)
    }

    pub fn remove_collaborator(&mut self, id: &str) -> bool {
        let before = self.collaborators.len();
        self.collaborators.retain(|c| c.id != id);
        self.collaborators.len() != before
    }

    pub fn collaborator(&self, id: &str) -> Option<&Collaborator> {
        self.collaborators.iter().find(|c| c.id == id)
    }

    fn collaborator_mut(&mut self, id: &str) -> Option<&mut Collaborator> {
        self.collaborators.iter_mut().find(|c| c.id == id)
    }

    /// Adds a shared task under a collaborator. Duplicate task names are
    /// allowed; blank input is ignored.
    pub fn add_task_to_collaborator(&mut self, id: &str, task: &str) -> bool {
        let trimmed = task.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.collaborator_mut(id) {
            Some(collaborator) => {
                collaborator.tasks.push(trimmed.to_string());
                true
            }
            None => false,
        }
    }

    pub fn remove_task_from_collaborator(&mut self, id: &str, index: usize) {
        if let Some(collaborator) = self.collaborator_mut(id) {
            if index < collaborator.tasks.len() {
                collaborator.tasks.remove(index);
            }
        }
    }

    /// Adds a tool under a collaborator, deduplicated per collaborator, and
    /// mirrors it into the role-level tool list when absent there.
    pub fn add_tool_to_collaborator(&mut self, id: &str, tool: &str) -> bool {
        let trimmed = tool.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some(collaborator) = self.collaborator_mut(id) else {
            return false;
        };
        if collaborator.tools.iter().any(|t| t == trimmed) {
            return false;
        }
        collaborator.tools.push(trimmed.to_string());
        if !self.tools.iter().any(|t| t == trimmed) {
            self.tools.push(trimmed.to_string());
        }
        true
    }

    pub fn remove_tool_from_collaborator(&mut self, id: &str, index: usize) {
        if let Some(collaborator) = self.collaborator_mut(id) {
            if index < collaborator.tools.len() {
                collaborator.tools.remove(index);
            }
        }
    }

    /// Records a pain point. The task name is the anchor: blank input skips
    /// the add entirely. Friction tags beyond the limit are dropped.
    pub fn record_pain_point(&mut self, mut pain: PainPoint) -> bool {
        let task = pain.task.trim().to_string();
        if task.is_empty() {
            return false;
        }
        pain.title = task.clone();
        pain.task = task;
        pain.friction_types.truncate(MAX_FRICTION_TYPES);
        self.pain_points.push(pain);
        true
    }

    pub fn remove_pain_point(&mut self, index: usize) {
        if index < self.pain_points.len() {
            self.pain_points.remove(index);
        }
    }

    /// Stable node keys of every collaborator, for override pruning.
    pub fn collaborator_keys(&self) -> impl Iterator<Item = &str> {
        self.collaborators.iter().map(|c| c.id.as_str())
    }

    /// Summary view with placeholders for unset fields.
    pub fn summary(&self) -> RoleSummary {
        RoleSummary {
            role: if self.role.name.trim().is_empty() {
                "Not set".to_string()
            } else {
                self.role.name.clone()
            },
            headcount: match self.role.headcount {
                Some(count) => count.to_string(),
                None => "Not set".to_string(),
            },
            description: if self.role.description.trim().is_empty() {
                "No description yet.".to_string()
            } else {
                self.role.description.clone()
            },
            goals: self.goals.clone(),
            tools: self.tools.clone(),
            collaborators: self.collaborators.iter().map(|c| c.name.clone()).collect(),
            pain_point_count: self.pain_points.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_adds_are_ignored() {
        let mut map = RoleMap::new();
        assert!(!map.add_goal("   "));
        assert!(!map.add_tool(""));
        assert!(!map.add_solo_task(" \t", Frequency::Daily));
        assert!(map.add_collaborator("  ").is_none());
        assert!(map.goals.is_empty());
        assert!(map.tools.is_empty());
        assert!(map.solo_tasks.is_empty());
        assert!(map.collaborators.is_empty());
    }

    #[test]
    fn test_collaborators_get_distinct_ids() {
        let mut map = RoleMap::new();
        let a = map.add_collaborator("Product Manager").unwrap();
        let b = map.add_collaborator("Product Manager").unwrap();
        assert_ne!(a, b);
        assert_eq!(map.collaborators.len(), 2);
    }

    #[test]
    fn test_duplicate_tasks_allowed_duplicate_tools_not() {
        let mut map = RoleMap::new();
        let id = map.add_collaborator("Ops").unwrap();
        assert!(map.add_task_to_collaborator(&id, "Triage"));
        assert!(map.add_task_to_collaborator(&id, "Triage"));
        assert_eq!(map.collaborator(&id).unwrap().tasks.len(), 2);

        assert!(map.add_tool_to_collaborator(&id, "Jira"));
        assert!(!map.add_tool_to_collaborator(&id, "Jira"));
        assert_eq!(map.collaborator(&id).unwrap().tools.len(), 1);
    }

    #[test]
    fn test_collaborator_tool_mirrors_into_role_tools_once() {
        let mut map = RoleMap::new();
        let a = map.add_collaborator("Ops").unwrap();
        let b = map.add_collaborator("Sales").unwrap();
        map.add_tool_to_collaborator(&a, "Slack");
        map.add_tool_to_collaborator(&b, "Slack");
        assert_eq!(map.tools, vec!["Slack".to_string()]);
    }

    #[test]
    fn test_pain_point_requires_task_and_caps_friction_tags() {
        let mut map = RoleMap::new();
        assert!(!map.record_pain_point(PainPoint {
            task: "  ".into(),
            ..PainPoint::default()
        }));

        let recorded = map.record_pain_point(PainPoint {
            task: " Sprint planning ".into(),
            severity: 4,
            friction_types: vec![
                FrictionType::Delay,
                FrictionType::Rework,
                FrictionType::ToolMismatch,
            ],
            ..PainPoint::default()
        });
        assert!(recorded);
        let pain = &map.pain_points[0];
        assert_eq!(pain.task, "Sprint planning");
        assert_eq!(pain.title, "Sprint planning");
        assert_eq!(pain.friction_types.len(), MAX_FRICTION_TYPES);
    }

    #[test]
    fn test_occurrence_constants() {
        assert_eq!(Frequency::Daily.weekly_occurrences(), 5.0);
        assert_eq!(Frequency::Daily.monthly_occurrences(), 22.0);
        assert_eq!(Frequency::Weekly.weekly_occurrences(), 1.0);
        assert_eq!(Frequency::Weekly.monthly_occurrences(), 4.35);
        assert_eq!(Frequency::Monthly.weekly_occurrences(), 0.25);
        assert_eq!(Frequency::Monthly.monthly_occurrences(), 1.0);
        assert_eq!(Frequency::Adhoc.weekly_occurrences(), 0.0);
        assert_eq!(Frequency::Adhoc.monthly_occurrences(), 0.0);
    }

    #[test]
    fn test_numeric_comfort_parsing() {
        assert_eq!(parse_duration_value("30"), 30.0);
        assert_eq!(parse_duration_value(" 2.5 "), 2.5);
        assert_eq!(parse_duration_value("abc"), 0.0);
        assert_eq!(parse_duration_value(""), 0.0);
        assert_eq!(parse_duration_value("-4"), 0.0);
        assert_eq!(parse_headcount("15"), Some(15));
        assert_eq!(parse_headcount("lots"), None);
    }

    #[test]
    fn test_summary_placeholders() {
        let map = RoleMap::new();
        let summary = map.summary();
        assert_eq!(summary.role, "Not set");
        assert_eq!(summary.headcount, "Not set");
        assert_eq!(summary.description, "No description yet.");
    }
}
