//! Manual node position overrides.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-dragged node positions, keyed by the node's stable key.
///
/// An entry here takes precedence over the computed layout position for that
/// node, and survives re-layouts triggered by unrelated state changes. Entries
/// are pruned the moment their node disappears (see [`PositionOverrides::prune`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionOverrides {
    positions: BTreeMap<String, Point>,
}

impl PositionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// The override for `key`, if the user has dragged that node.
    pub fn get(&self, key: &str) -> Option<Point> {
        self.positions.get(key).copied()
    }

    /// Records (or replaces) the override for `key`.
    pub fn set(&mut self, key: impl Into<String>, position: Point) {
        self.positions.insert(key.into(), position);
    }

    /// Removes a single override.
    pub fn remove(&mut self, key: &str) -> Option<Point> {
        self.positions.remove(key)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.positions.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Garbage-collects overrides whose node no longer exists.
    ///
    /// Returns `true` only when an entry was actually removed; when every
    /// retained key is still live the map is left untouched so callers can
    /// skip a redundant state write.
    pub fn prune<'a, I>(&mut self, live_keys: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let live: std::collections::BTreeSet<&str> = live_keys.into_iter().collect();
        let stale: Vec<String> = self
            .positions
            .keys()
            .filter(|k| !live.contains(k.as_str()))
            .cloned()
            .collect();
        if stale.is_empty() {
            return false;
        }
        for key in &stale {
            self.positions.remove(key);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_replaces_previous_value() {
        let mut overrides = PositionOverrides::new();
        overrides.set("a", Point::new(1.0, 2.0));
        overrides.set("a", Point::new(3.0, 4.0));
        assert_eq!(overrides.get("a"), Some(Point::new(3.0, 4.0)));
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_prune_removes_only_stale_entries() {
        let mut overrides = PositionOverrides::new();
        overrides.set("a", Point::new(1.0, 1.0));
        overrides.set("b", Point::new(2.0, 2.0));
        overrides.set("c", Point::new(3.0, 3.0));

        let changed = overrides.prune(["a", "c"]);
        assert!(changed);
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("a"), Some(Point::new(1.0, 1.0)));
        assert!(overrides.get("b").is_none());
        assert_eq!(overrides.get("c"), Some(Point::new(3.0, 3.0)));
    }

    #[test]
    fn test_prune_is_a_no_op_when_all_keys_live() {
        let mut overrides = PositionOverrides::new();
        overrides.set("a", Point::new(1.0, 1.0));
        overrides.set("c", Point::new(3.0, 3.0));

        let before = overrides.clone();
        let changed = overrides.prune(["a", "b", "c"]);
        assert!(!changed);
        assert_eq!(overrides, before);
    }

    #[test]
    fn test_prune_of_empty_map_reports_no_change() {
        let mut overrides = PositionOverrides::new();
        assert!(!overrides.prune(["a"]));
    }
}
