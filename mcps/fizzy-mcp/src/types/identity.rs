//! Identity of the token holder

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::User;

/// Everything `/my/identity` returns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub accounts: Vec<Account>,
}

/// An account the token holder belongs to, with their user in it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Path segment used as the account identifier in URLs
    pub slug: String,
    pub created_at: Option<DateTime<Utc>>,
    pub user: Option<User>,
}
