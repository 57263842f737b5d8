//! Comment type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::User;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub body: CommentBody,
    pub creator: Option<User>,
    pub reactions_url: Option<String>,
    pub url: String,
}

/// Comment text in both renderings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentBody {
    pub plain_text: String,
    pub html: String,
}
