//! Board type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::User;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    pub id: String,

    pub name: String,

    /// Whether every user in the account can see the board
    pub all_access: bool,

    pub created_at: Option<DateTime<Utc>>,

    pub url: String,

    pub creator: Option<User>,
}
