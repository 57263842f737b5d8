//! Tag type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: String,
    pub title: String,
    pub created_at: Option<DateTime<Utc>>,
    pub url: String,
}
