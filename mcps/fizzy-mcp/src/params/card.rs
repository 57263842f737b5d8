//! Card parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Publication status of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    Published,
    Drafted,
}

/// Which card index to list from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CardIndex {
    All,
    Closed,
    NotNow,
    Stalled,
    PostponingSoon,
    Golden,
}

impl CardIndex {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardIndex::All => "all",
            CardIndex::Closed => "closed",
            CardIndex::NotNow => "not_now",
            CardIndex::Stalled => "stalled",
            CardIndex::PostponingSoon => "postponing_soon",
            CardIndex::Golden => "golden",
        }
    }
}

/// Sort order for card listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CardSort {
    Latest,
    Newest,
    Oldest,
}

impl CardSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardSort::Latest => "latest",
            CardSort::Newest => "newest",
            CardSort::Oldest => "oldest",
        }
    }
}

/// Parameters for listing cards
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListCardsParams {
    #[serde(default, deserialize_with = "crate::serde_utils::string_list")]
    #[schemars(with = "Option<Vec<String>>", description = "Filter by board ID(s)")]
    pub board_ids: Option<Vec<String>>,

    #[serde(default, deserialize_with = "crate::serde_utils::string_list")]
    #[schemars(with = "Option<Vec<String>>", description = "Filter by tag ID(s)")]
    pub tag_ids: Option<Vec<String>>,

    #[serde(default, deserialize_with = "crate::serde_utils::string_list")]
    #[schemars(with = "Option<Vec<String>>", description = "Filter by assignee user ID(s)")]
    pub assignee_ids: Option<Vec<String>>,

    #[serde(default, deserialize_with = "crate::serde_utils::string_list")]
    #[schemars(with = "Option<Vec<String>>", description = "Filter by card creator ID(s)")]
    pub creator_ids: Option<Vec<String>>,

    #[schemars(description = "Filter by card index")]
    pub indexed_by: Option<CardIndex>,

    #[schemars(description = "Sort order (default: latest)")]
    pub sorted_by: Option<CardSort>,

    #[serde(default, deserialize_with = "crate::serde_utils::string_list")]
    #[schemars(with = "Option<Vec<String>>", description = "Search terms to filter cards")]
    pub terms: Option<Vec<String>>,
}

/// Parameters addressing a single card by number
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CardNumberParams {
    #[serde(deserialize_with = "crate::serde_utils::number_from_any")]
    #[schemars(with = "u64", description = "The card number")]
    pub card_number: u64,
}

/// Parameters for creating a card
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateCardParams {
    #[schemars(description = "The ID of the board to create the card on")]
    pub board_id: String,

    #[schemars(description = "The title of the card")]
    pub title: String,

    #[schemars(description = "Rich text description of the card (HTML supported)")]
    pub description: Option<String>,

    #[schemars(description = "Initial status (default: published)")]
    pub status: Option<CardStatus>,

    #[serde(default, deserialize_with = "crate::serde_utils::string_list")]
    #[schemars(with = "Option<Vec<String>>", description = "Tag IDs to apply to the card")]
    pub tag_ids: Option<Vec<String>>,
}

/// Parameters for updating a card
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCardParams {
    #[serde(deserialize_with = "crate::serde_utils::number_from_any")]
    #[schemars(with = "u64", description = "The card number to update")]
    pub card_number: u64,

    #[schemars(description = "The new title of the card")]
    pub title: Option<String>,

    #[schemars(description = "The new description of the card")]
    pub description: Option<String>,

    #[schemars(description = "Card status")]
    pub status: Option<CardStatus>,

    #[serde(default, deserialize_with = "crate::serde_utils::string_list")]
    #[schemars(with = "Option<Vec<String>>", description = "Tag IDs to apply to the card")]
    pub tag_ids: Option<Vec<String>>,
}

/// Parameters for moving a card out of triage
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TriageCardParams {
    #[serde(deserialize_with = "crate::serde_utils::number_from_any")]
    #[schemars(with = "u64", description = "The card number to triage")]
    pub card_number: u64,

    #[schemars(description = "The ID of the column to move the card into")]
    pub column_id: String,
}

/// Parameters for toggling a user's assignment to a card
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ToggleAssignmentParams {
    #[serde(deserialize_with = "crate::serde_utils::number_from_any")]
    #[schemars(with = "u64", description = "The card number")]
    pub card_number: u64,

    #[schemars(description = "The ID of the user to assign/unassign")]
    pub assignee_id: String,
}

/// Parameters for toggling a tag on a card
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ToggleTagParams {
    #[serde(deserialize_with = "crate::serde_utils::number_from_any")]
    #[schemars(with = "u64", description = "The card number")]
    pub card_number: u64,

    #[schemars(description = "The title of the tag (leading # is stripped by Fizzy)")]
    pub tag_title: String,
}
