//! Board parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters addressing a single board
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BoardIdParams {
    #[schemars(description = "The ID of the board")]
    pub board_id: String,
}

/// Parameters for creating a board
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateBoardParams {
    #[schemars(description = "The name of the board")]
    pub name: String,

    #[schemars(description = "Whether any user in the account can access this board (default: true)")]
    pub all_access: Option<bool>,

    #[schemars(description = "Number of days of inactivity before cards are automatically postponed")]
    pub auto_postpone_period: Option<u32>,

    #[schemars(description = "Rich text description shown on the public board page")]
    pub public_description: Option<String>,
}

/// Parameters for updating a board
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateBoardParams {
    #[schemars(description = "The ID of the board to update")]
    pub board_id: String,

    #[schemars(description = "The new name of the board")]
    pub name: Option<String>,

    #[schemars(description = "Whether any user in the account can access this board")]
    pub all_access: Option<bool>,

    #[schemars(description = "Number of days of inactivity before cards are automatically postponed")]
    pub auto_postpone_period: Option<u32>,

    #[schemars(description = "Rich text description shown on the public board page")]
    pub public_description: Option<String>,

    #[serde(default, deserialize_with = "crate::serde_utils::string_list")]
    #[schemars(
        with = "Option<Vec<String>>",
        description = "User IDs who should have access (only when all_access is false)"
    )]
    pub user_ids: Option<Vec<String>>,
}
