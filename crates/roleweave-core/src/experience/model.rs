//! Experience-board domain model.
//!
//! The board captures an experience as typed cards (personas, moments,
//! touchpoints, ...). Each card added through the form also lands on the
//! canvas as a node in a fixed grid; nodes can additionally be placed
//! directly at a canvas position. Nodes are linked with the shared two-click
//! gesture. Card types have no instance caps.

use crate::canvas::Connections;
use crate::geometry::Point;
use crate::id;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grid placement of nodes spawned from the card form.
pub const GRID_COLUMNS: usize = 4;
pub const GRID_ORIGIN_X: f64 = 180.0;
pub const GRID_ORIGIN_Y: f64 = 140.0;
pub const GRID_STEP_X: f64 = 220.0;
pub const GRID_STEP_Y: f64 = 180.0;

/// The fixed set of card kinds on the experience board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    #[default]
    Persona,
    Moment,
    Touchpoint,
    Feeling,
    Friction,
    Choice,
    Outcome,
    Opportunity,
    Wait,
}

impl CardType {
    pub const ALL: [CardType; 9] = [
        CardType::Persona,
        CardType::Moment,
        CardType::Touchpoint,
        CardType::Feeling,
        CardType::Friction,
        CardType::Choice,
        CardType::Outcome,
        CardType::Opportunity,
        CardType::Wait,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CardType::Persona => "persona",
            CardType::Moment => "moment",
            CardType::Touchpoint => "touchpoint",
            CardType::Feeling => "feeling",
            CardType::Friction => "friction",
            CardType::Choice => "choice",
            CardType::Outcome => "outcome",
            CardType::Opportunity => "opportunity",
            CardType::Wait => "wait",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardType::Persona => "Persona",
            CardType::Moment => "Moment",
            CardType::Touchpoint => "Touchpoint",
            CardType::Feeling => "Feeling",
            CardType::Friction => "Friction",
            CardType::Choice => "Choice",
            CardType::Outcome => "Outcome",
            CardType::Opportunity => "Opportunity",
            CardType::Wait => "Wait",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CardType::Persona => "#2563eb",
            CardType::Moment => "#d97706",
            CardType::Touchpoint => "#a855f7",
            CardType::Feeling => "#0f766e",
            CardType::Friction => "#ea580c",
            CardType::Choice => "#d97706",
            CardType::Outcome => "#16a34a",
            CardType::Opportunity => "#6366f1",
            CardType::Wait => "#6b7280",
        }
    }

    /// Soft background tint behind the card icon.
    pub fn background(&self) -> &'static str {
        match self {
            CardType::Persona => "rgba(37,99,235,0.12)",
            CardType::Moment => "rgba(217,119,6,0.12)",
            CardType::Touchpoint => "rgba(168,85,247,0.12)",
            CardType::Feeling => "rgba(15,118,110,0.12)",
            CardType::Friction => "rgba(234,88,12,0.12)",
            CardType::Choice => "rgba(217,119,6,0.12)",
            CardType::Outcome => "rgba(22,163,74,0.12)",
            CardType::Opportunity => "rgba(99,102,241,0.14)",
            CardType::Wait => "rgba(107,114,128,0.12)",
        }
    }

    /// One-line guiding prompt shown with the type.
    pub fn prompt(&self) -> &'static str {
        match self {
            CardType::Persona => "Who is involved?",
            CardType::Moment => "When/where does this happen?",
            CardType::Touchpoint => "Where does the interaction occur?",
            CardType::Feeling => "What emotions show up?",
            CardType::Friction => "What slows people down?",
            CardType::Choice => "What decisions are made?",
            CardType::Outcome => "What success looks like?",
            CardType::Opportunity => "Where can we improve?",
            CardType::Wait => "Where do we pause or delay?",
        }
    }
}

/// A card in the experience inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceCard {
    pub id: String,
    pub card_type: CardType,
    pub detail: String,
    pub quantity: u32,
}

/// A node on the experience canvas.
///
/// Color and background are denormalized from the type at creation so stored
/// snapshots render identically even if the palette evolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardNode {
    pub id: String,
    pub card_type: CardType,
    pub label: String,
    pub detail: String,
    pub quantity: u32,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub bg: String,
}

impl BoardNode {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, at: Point) {
        self.x = at.x;
        self.y = at.y;
    }
}

/// Identifying details of the experience being redesigned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperienceInfo {
    /// Assigned on first save.
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub business_unit: String,
    pub scenario: String,
    pub owner: String,
}

/// A straight connector between two live nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionLine {
    pub id: String,
    pub from: Point,
    pub to: Point,
}

/// The experience-board aggregate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperienceBoard {
    pub info: ExperienceInfo,
    pub cards: Vec<ExperienceCard>,
    pub nodes: Vec<BoardNode>,
    pub connections: Connections,
}

impl ExperienceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next grid slot for a form-created node.
    fn grid_slot(&self) -> Point {
        let row = self.nodes.len() / GRID_COLUMNS;
        let col = self.nodes.len() % GRID_COLUMNS;
        Point::new(
            GRID_ORIGIN_X + col as f64 * GRID_STEP_X,
            GRID_ORIGIN_Y + row as f64 * GRID_STEP_Y,
        )
    }

    /// Adds a card and drops a matching node onto the next grid slot.
    ///
    /// Blank detail is silently ignored; quantity is floored at 1. Returns
    /// the new card's id.
    pub fn add_card(&mut self, card_type: CardType, detail: &str, quantity: u32) -> Option<String> {
        let trimmed = detail.trim();
        if trimmed.is_empty() {
            return None;
        }
        let quantity = quantity.max(1);
        let card_id = id::record_id(card_type.key());
        let slot = self.grid_slot();
        self.cards.push(ExperienceCard {
            id: card_id.clone(),
            card_type,
            detail: trimmed.to_string(),
            quantity,
        });
        self.nodes.push(BoardNode {
            id: card_id.clone(),
            card_type,
            label: card_type.label().to_string(),
            detail: trimmed.to_string(),
            quantity,
            x: slot.x,
            y: slot.y,
            color: card_type.color().to_string(),
            bg: card_type.background().to_string(),
        });
        Some(card_id)
    }

    /// Removes a card from the inventory. The canvas node with the same id,
    /// if still present, is left alone; the two lists are only loosely
    /// coupled.
    pub fn remove_card(&mut self, id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        self.cards.len() != before
    }

    /// Places a node directly at a canvas position, seeded with the type's
    /// prompt as detail. Returns the new node's id.
    pub fn place_node_at(&mut self, card_type: CardType, at: Point) -> String {
        let node_id = id::record_id(card_type.key());
        self.nodes.push(BoardNode {
            id: node_id.clone(),
            card_type,
            label: card_type.label().to_string(),
            detail: card_type.prompt().to_string(),
            quantity: 1,
            x: at.x,
            y: at.y,
            color: card_type.color().to_string(),
            bg: card_type.background().to_string(),
        });
        node_id
    }

    pub fn node(&self, id: &str) -> Option<&BoardNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Removes a node and every connection touching it.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.connections.remove_endpoint(id);
        true
    }

    pub fn move_node(&mut self, id: &str, to: Point) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.set_position(to);
                true
            }
            None => false,
        }
    }

    /// Connects two nodes; duplicate (from, to) pairs are silently dropped.
    pub fn link(&mut self, from: &str, to: &str) -> bool {
        self.connections.connect(from, to)
    }

    /// Quantity totals per card type, summed over the inventory.
    pub fn type_quantities(&self) -> BTreeMap<CardType, u32> {
        let mut totals = BTreeMap::new();
        for card in &self.cards {
            *totals.entry(card.card_type).or_insert(0) += card.quantity;
        }
        totals
    }

    /// Line geometry for every connection whose endpoints still exist.
    pub fn connection_lines(&self) -> Vec<ConnectionLine> {
        self.connections
            .iter()
            .filter_map(|conn| {
                let from = self.node(&conn.from)?.position();
                let to = self.node(&conn.to)?.position();
                Some(ConnectionLine {
                    id: conn.id.clone(),
                    from,
                    to,
                })
            })
            .collect()
    }

    /// Wipes the canvas (nodes and connections). The card inventory and
    /// experience info survive.
    pub fn clear_canvas(&mut self) {
        self.nodes.clear();
        self.connections.clear();
    }
}
