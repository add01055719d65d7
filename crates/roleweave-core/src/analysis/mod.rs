//! Derived-data engine.
//!
//! Pure recomputations over the current store contents: shared-resource
//! maps, pain-impact aggregates, and the severity visuals derived from them.
//! Nothing in here is stored; callers recompute whenever inputs change.

pub mod impact;
pub mod overlap;

pub use impact::{
    classify_pain_points, format_minutes, pain_loss, pain_summary, palette_for, severity_label,
    severity_tier, PainLoss, PainPartition, PaletteEntry, SeverityTier, SEVERITY_PALETTE,
};
pub use overlap::{
    is_shared, shared_entries, shared_tasks_map, shared_tools_map, task_options, ROLE_OWNER,
};
