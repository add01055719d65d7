//! Two-click node linking and the directed connection list.

use crate::id;
use serde::{Deserialize, Serialize};

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub from: String,
    pub to: String,
}

/// The connection list of one canvas, deduplicated by (from, to).
///
/// The reverse direction is a distinct edge: `A -> B` and `B -> A` may
/// coexist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Connections {
    links: Vec<Connection>,
}

impl Connections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `from -> to` unless that exact edge already exists.
    ///
    /// Returns `true` when an edge was created.
    pub fn connect(&mut self, from: &str, to: &str) -> bool {
        if self.contains(from, to) {
            return false;
        }
        self.links.push(Connection {
            id: id::connection_id(from, to),
            from: from.to_string(),
            to: to.to_string(),
        });
        true
    }

    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.links.iter().any(|c| c.from == from && c.to == to)
    }

    /// Removes every edge touching `node_id`, in either direction.
    pub fn remove_endpoint(&mut self, node_id: &str) {
        self.links.retain(|c| c.from != node_id && c.to != node_id);
    }

    pub fn remove(&mut self, connection_id: &str) -> bool {
        let before = self.links.len();
        self.links.retain(|c| c.id != connection_id);
        self.links.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn clear(&mut self) {
        self.links.clear();
    }
}

impl FromIterator<Connection> for Connections {
    fn from_iter<T: IntoIterator<Item = Connection>>(iter: T) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}

/// The pending half of a two-click link gesture.
///
/// Clicking a node while nothing is pending records it as the link source;
/// clicking a second, different node completes the link. Clicking the
/// already-pending node simply re-enters the pending state; the only ways out
/// are completing a link or an explicit [`LinkSelection::clear`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkSelection {
    pending: Option<String>,
}

impl LinkSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one node click into the gesture.
    ///
    /// Returns `Some((from, to))` when this click completed a link, `None`
    /// when it (re)armed the pending state.
    pub fn click(&mut self, node_id: &str) -> Option<(String, String)> {
        match self.pending.take() {
            Some(from) if from != node_id => Some((from, node_id.to_string())),
            _ => {
                self.pending = Some(node_id.to_string());
                None
            }
        }
    }

    /// The node waiting for a link target, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_edges_collapse() {
        let mut connections = Connections::new();
        assert!(connections.connect("a", "b"));
        assert!(!connections.connect("a", "b"));
        assert_eq!(connections.len(), 1);
    }

    #[test]
    fn test_reverse_direction_is_distinct() {
        let mut connections = Connections::new();
        connections.connect("a", "b");
        connections.connect("b", "a");
        assert_eq!(connections.len(), 2);
        assert!(connections.contains("a", "b"));
        assert!(connections.contains("b", "a"));
    }

    #[test]
    fn test_remove_endpoint_cascades_both_directions() {
        let mut connections = Connections::new();
        connections.connect("a", "b");
        connections.connect("c", "a");
        connections.connect("b", "c");
        connections.remove_endpoint("a");
        assert_eq!(connections.len(), 1);
        assert!(connections.contains("b", "c"));
    }

    #[test]
    fn test_two_clicks_complete_a_link() {
        let mut selection = LinkSelection::new();
        assert!(selection.click("a").is_none());
        assert_eq!(selection.pending(), Some("a"));
        assert_eq!(
            selection.click("b"),
            Some(("a".to_string(), "b".to_string()))
        );
        assert!(selection.pending().is_none());
    }

    #[test]
    fn test_clicking_pending_node_stays_pending() {
        let mut selection = LinkSelection::new();
        selection.click("a");
        assert!(selection.click("a").is_none());
        assert_eq!(selection.pending(), Some("a"));
    }
}
