//! Step parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters addressing one step on a card
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StepIdParams {
    #[serde(deserialize_with = "crate::serde_utils::number_from_any")]
    #[schemars(with = "u64", description = "The card number")]
    pub card_number: u64,

    #[schemars(description = "The ID of the step")]
    pub step_id: String,
}

/// Parameters for creating a step
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateStepParams {
    #[serde(deserialize_with = "crate::serde_utils::number_from_any")]
    #[schemars(with = "u64", description = "The card number")]
    pub card_number: u64,

    #[schemars(description = "The step text")]
    pub content: String,

    #[schemars(description = "Whether the step is completed (default: false)")]
    pub completed: Option<bool>,
}

/// Parameters for updating a step
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateStepParams {
    #[serde(deserialize_with = "crate::serde_utils::number_from_any")]
    #[schemars(with = "u64", description = "The card number")]
    pub card_number: u64,

    #[schemars(description = "The ID of the step to update")]
    pub step_id: String,

    #[schemars(description = "The new step text")]
    pub content: Option<String>,

    #[schemars(description = "Whether the step is completed")]
    pub completed: Option<bool>,
}
