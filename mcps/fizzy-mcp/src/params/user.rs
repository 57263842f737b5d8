//! User parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UserIdParams {
    #[schemars(description = "The ID of the user")]
    pub user_id: String,
}
