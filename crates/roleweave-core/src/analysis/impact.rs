//! Pain-point impact estimates and severity visuals.

use crate::rolemap::PainPoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the severity palette: fill and stroke for badge tinting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub severity: u8,
    pub fill: &'static str,
    pub stroke: &'static str,
}

/// Fixed 5-step palette, green through dark red.
pub const SEVERITY_PALETTE: [PaletteEntry; 5] = [
    PaletteEntry { severity: 1, fill: "#107c10", stroke: "#0b6a0b" },
    PaletteEntry { severity: 2, fill: "#c19c00", stroke: "#8b6f00" },
    PaletteEntry { severity: 3, fill: "#f7630c", stroke: "#c3540a" },
    PaletteEntry { severity: 4, fill: "#d13438", stroke: "#b02024" },
    PaletteEntry { severity: 5, fill: "#a4262c", stroke: "#8c1f24" },
];

/// Palette entry for a severity value, clamped to 1-5.
pub fn palette_for(severity: u8) -> &'static PaletteEntry {
    let clamped = severity.clamp(1, 5);
    &SEVERITY_PALETTE[(clamped - 1) as usize]
}

/// Coarse status tint for simple badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Danger,
    Warning,
    Brand,
}

/// Severity >= 4 is danger, >= 3 warning, everything else informational.
pub fn severity_tier(severity: u8) -> SeverityTier {
    if severity >= 4 {
        SeverityTier::Danger
    } else if severity >= 3 {
        SeverityTier::Warning
    } else {
        SeverityTier::Brand
    }
}

/// Facilitator wording for each severity step.
pub fn severity_label(severity: u8) -> &'static str {
    match severity.clamp(1, 5) {
        1 => "Mild inconvenience",
        2 => "Noticeable friction",
        3 => "Material delay or cost",
        4 => "High business impact",
        _ => "Critical issue / repeated failure",
    }
}

/// Estimated time loss of a pain point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PainLoss {
    pub weekly_minutes: f64,
    pub monthly_minutes: f64,
}

/// Time loss for one pain point: per-occurrence minutes times the
/// frequency's occurrence constants.
pub fn pain_loss(pain: &PainPoint) -> PainLoss {
    let per_occurrence = pain.per_occurrence_minutes();
    PainLoss {
        weekly_minutes: per_occurrence * pain.frequency.weekly_occurrences(),
        monthly_minutes: per_occurrence * pain.frequency.monthly_occurrences(),
    }
}

/// Total time loss across all pain points.
pub fn pain_summary(pain_points: &[PainPoint]) -> PainLoss {
    pain_points.iter().fold(PainLoss::default(), |acc, pain| {
        let loss = pain_loss(pain);
        PainLoss {
            weekly_minutes: acc.weekly_minutes + loss.weekly_minutes,
            monthly_minutes: acc.monthly_minutes + loss.monthly_minutes,
        }
    })
}

/// Pain points split by whether their task is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct PainPartition<'a> {
    /// Task not present in any shared-task bucket.
    pub isolated: Vec<&'a PainPoint>,
    /// Task shared between the role and at least two owners.
    pub collaborative: Vec<&'a PainPoint>,
}

/// Partitions pain points for the facilitator summary view.
pub fn classify_pain_points<'a>(
    pain_points: &'a [PainPoint],
    shared_tasks: &BTreeMap<String, Vec<String>>,
) -> PainPartition<'a> {
    let mut partition = PainPartition {
        isolated: Vec::new(),
        collaborative: Vec::new(),
    };
    for pain in pain_points {
        if super::overlap::is_shared(shared_tasks, &pain.task) {
            partition.collaborative.push(pain);
        } else {
            partition.isolated.push(pain);
        }
    }
    partition
}

/// Formats a minute total for display. Zero or NaN renders as an em-dash
/// placeholder; an hour or more is shown in hours with at most one decimal.
pub fn format_minutes(minutes: f64) -> String {
    if minutes == 0.0 || minutes.is_nan() {
        return "\u{2014}".to_string();
    }
    if minutes < 60.0 {
        return format!("{} mins", minutes.round() as i64);
    }
    let hours = minutes / 60.0;
    if hours.fract() == 0.0 {
        format!("{} hrs", hours as i64)
    } else {
        format!("{:.1} hrs", hours)
    }
}
