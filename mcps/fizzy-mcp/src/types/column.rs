//! Column type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workflow column on a board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    pub id: String,
    pub name: String,
    /// CSS color token, e.g. `var(--color-card-3)`
    pub color: String,
    pub created_at: Option<DateTime<Utc>>,
}
