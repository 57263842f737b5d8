//! Card type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::common::User;

/// A card on a board
///
/// Cards are addressed by `number`, which is unique within the account,
/// rather than by `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub id: String,

    pub number: u64,

    pub title: String,

    /// Publication status ("published", "drafted")
    pub status: String,

    /// Plain-text description
    pub description: Option<String>,

    pub description_html: Option<String>,

    pub image_url: Option<String>,

    /// Tag titles applied to the card
    pub tags: Vec<String>,

    pub golden: bool,

    pub last_active_at: Option<DateTime<Utc>>,

    pub created_at: Option<DateTime<Utc>>,

    pub url: String,

    pub board: Option<Board>,

    pub creator: Option<User>,

    pub comments_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_decodes_with_nested_board_and_nulls() {
        let card: Card = serde_json::from_value(json!({
            "id": "03f5vaeq985jlvwv3arl4srq2",
            "number": 1,
            "title": "First!",
            "status": "published",
            "description": null,
            "tags": ["programming"],
            "golden": false,
            "created_at": "2025-12-05T19:36:35.534Z",
            "url": "http://fizzy.localhost:3006/897362094/cards/4",
            "board": { "id": "03f5v9zkft4hj9qq0lsn9ohcm", "name": "Fizzy", "all_access": true },
            "creator": { "id": "03f5v9zjw7pz8717a4no1h8a7", "name": "David Heinemeier Hansson", "role": "owner", "active": true },
            "reactions_url": "ignored"
        }))
        .unwrap();

        assert_eq!(card.number, 1);
        assert_eq!(card.description, None);
        assert_eq!(card.tags, vec!["programming"]);
        assert_eq!(card.board.unwrap().name, "Fizzy");
        assert_eq!(card.creator.unwrap().role, "owner");
        assert!(card.created_at.is_some());
    }
}
