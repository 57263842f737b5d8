//! Notification parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct NotificationIdParams {
    #[schemars(description = "The ID of the notification")]
    pub notification_id: String,
}
