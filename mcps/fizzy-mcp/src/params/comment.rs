//! Comment parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters addressing one comment on a card
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CommentIdParams {
    #[serde(deserialize_with = "crate::serde_utils::number_from_any")]
    #[schemars(with = "u64", description = "The card number")]
    pub card_number: u64,

    #[schemars(description = "The ID of the comment")]
    pub comment_id: String,
}

/// Parameters for creating a comment
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateCommentParams {
    #[serde(deserialize_with = "crate::serde_utils::number_from_any")]
    #[schemars(with = "u64", description = "The card number")]
    pub card_number: u64,

    #[schemars(description = "The comment body (supports rich text HTML)")]
    pub body: String,
}

/// Parameters for updating a comment
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCommentParams {
    #[serde(deserialize_with = "crate::serde_utils::number_from_any")]
    #[schemars(with = "u64", description = "The card number")]
    pub card_number: u64,

    #[schemars(description = "The ID of the comment to update")]
    pub comment_id: String,

    #[schemars(description = "The new comment body")]
    pub body: String,
}
