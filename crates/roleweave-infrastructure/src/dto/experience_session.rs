//! Experience-board session DTO.

use super::ConnectionDto;
use roleweave_core::canvas::Connections;
use roleweave_core::experience::{
    BoardNode, CardType, ExperienceBoard, ExperienceCard, ExperienceInfo,
};
use serde::{Deserialize, Serialize};

/// The stored shape of one experience-board session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceSessionV1 {
    pub id: Option<String>,
    pub experience_info: ExperienceInfoDto,
    pub cards: Vec<ExperienceCardDto>,
    pub nodes: Vec<BoardNodeDto>,
    pub connections: Vec<ConnectionDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceInfoDto {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub business_unit: String,
    pub scenario: String,
    pub owner: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceCardDto {
    pub id: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub detail: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardNodeDto {
    pub id: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub label: String,
    pub detail: Option<String>,
    pub quantity: Option<u32>,
    pub x: f64,
    pub y: f64,
    pub color: Option<String>,
    pub bg: Option<String>,
}

impl ExperienceSessionV1 {
    /// Converts the stored blob into the domain aggregate. Optional node
    /// fields fall back to the card type's own label, colors, and a quantity
    /// of one.
    pub fn into_domain(self) -> ExperienceBoard {
        let cards = self
            .cards
            .into_iter()
            .map(|dto| ExperienceCard {
                id: dto.id,
                card_type: dto.card_type,
                detail: dto.detail,
                quantity: dto.quantity.max(1),
            })
            .collect();

        let nodes = self
            .nodes
            .into_iter()
            .map(|dto| BoardNode {
                label: if dto.label.is_empty() {
                    dto.card_type.label().to_string()
                } else {
                    dto.label
                },
                detail: dto.detail.unwrap_or_default(),
                quantity: dto.quantity.unwrap_or(1).max(1),
                color: dto
                    .color
                    .unwrap_or_else(|| dto.card_type.color().to_string()),
                bg: dto
                    .bg
                    .unwrap_or_else(|| dto.card_type.background().to_string()),
                id: dto.id,
                card_type: dto.card_type,
                x: dto.x,
                y: dto.y,
            })
            .collect();

        let connections: Connections = self
            .connections
            .into_iter()
            .map(Into::into)
            .collect();

        ExperienceBoard {
            info: ExperienceInfo {
                id: self.experience_info.id.or(self.id),
                name: self.experience_info.name,
                description: self.experience_info.description,
                business_unit: self.experience_info.business_unit,
                scenario: self.experience_info.scenario,
                owner: self.experience_info.owner,
            },
            cards,
            nodes,
            connections,
        }
    }
}

impl From<&ExperienceBoard> for ExperienceSessionV1 {
    fn from(board: &ExperienceBoard) -> Self {
        Self {
            id: board.info.id.clone(),
            experience_info: ExperienceInfoDto {
                id: board.info.id.clone(),
                name: board.info.name.clone(),
                description: board.info.description.clone(),
                business_unit: board.info.business_unit.clone(),
                scenario: board.info.scenario.clone(),
                owner: board.info.owner.clone(),
            },
            cards: board
                .cards
                .iter()
                .map(|card| ExperienceCardDto {
                    id: card.id.clone(),
                    card_type: card.card_type,
                    detail: card.detail.clone(),
                    quantity: card.quantity,
                })
                .collect(),
            nodes: board
                .nodes
                .iter()
                .map(|node| BoardNodeDto {
                    id: node.id.clone(),
                    card_type: node.card_type,
                    label: node.label.clone(),
                    detail: Some(node.detail.clone()),
                    quantity: Some(node.quantity),
                    x: node.x,
                    y: node.y,
                    color: Some(node.color.clone()),
                    bg: Some(node.bg.clone()),
                })
                .collect(),
            connections: board.connections.iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roleweave_core::geometry::Point;

    #[test]
    fn test_minimal_node_fills_type_defaults() {
        let json = r#"{ "nodes": [ { "id": "friction-1-aaaa", "type": "friction", "x": 5, "y": 6 } ] }"#;
        let board = serde_json::from_str::<ExperienceSessionV1>(json)
            .unwrap()
            .into_domain();
        let node = &board.nodes[0];
        assert_eq!(node.label, "Friction");
        assert_eq!(node.detail, "");
        assert_eq!(node.quantity, 1);
        assert_eq!(node.color, "#ea580c");
        assert_eq!(node.bg, "rgba(234,88,12,0.12)");
        assert_eq!(node.position(), Point::new(5.0, 6.0));
    }

    #[test]
    fn test_round_trip_preserves_board() {
        let mut board = ExperienceBoard::new();
        board.info.name = "Onboarding".to_string();
        board.info.scenario = "First week".to_string();
        board.info.id = Some("9-ab".to_string());
        let a = board.add_card(CardType::Persona, "New joiner", 2).unwrap();
        let b = board.place_node_at(CardType::Outcome, Point::new(400.0, 300.0));
        board.link(&a, &b);

        let dto = ExperienceSessionV1::from(&board);
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("\"experienceInfo\""));
        assert!(json.contains("\"businessUnit\""));

        let back = serde_json::from_str::<ExperienceSessionV1>(&json)
            .unwrap()
            .into_domain();
        assert_eq!(back, board);
    }

    #[test]
    fn test_card_quantity_is_floored_on_load() {
        let json = r#"{ "cards": [ { "id": "persona-1-aaaa", "type": "persona", "detail": "x", "quantity": 0 } ] }"#;
        let board = serde_json::from_str::<ExperienceSessionV1>(json)
            .unwrap()
            .into_domain();
        assert_eq!(board.cards[0].quantity, 1);
    }
}
