//! Column parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Column color tokens accepted by Fizzy
///
/// The wire value is the CSS variable; the plain color names are accepted as
/// aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ColumnColor {
    #[serde(rename = "var(--color-card-default)", alias = "blue", alias = "default")]
    Blue,
    #[serde(rename = "var(--color-card-1)", alias = "gray")]
    Gray,
    #[serde(rename = "var(--color-card-2)", alias = "tan")]
    Tan,
    #[serde(rename = "var(--color-card-3)", alias = "yellow")]
    Yellow,
    #[serde(rename = "var(--color-card-4)", alias = "lime")]
    Lime,
    #[serde(rename = "var(--color-card-5)", alias = "aqua")]
    Aqua,
    #[serde(rename = "var(--color-card-6)", alias = "violet")]
    Violet,
    #[serde(rename = "var(--color-card-7)", alias = "purple")]
    Purple,
    #[serde(rename = "var(--color-card-8)", alias = "pink")]
    Pink,
}

/// Parameters addressing one column
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ColumnIdParams {
    #[schemars(description = "The ID of the board")]
    pub board_id: String,

    #[schemars(description = "The ID of the column")]
    pub column_id: String,
}

/// Parameters for creating a column
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateColumnParams {
    #[schemars(description = "The ID of the board")]
    pub board_id: String,

    #[schemars(description = "The name of the column")]
    pub name: String,

    #[schemars(description = "Column color: var(--color-card-default) (Blue), var(--color-card-1) (Gray), var(--color-card-2) (Tan), var(--color-card-3) (Yellow), var(--color-card-4) (Lime), var(--color-card-5) (Aqua), var(--color-card-6) (Violet), var(--color-card-7) (Purple), var(--color-card-8) (Pink)")]
    pub color: Option<ColumnColor>,
}

/// Parameters for updating a column
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateColumnParams {
    #[schemars(description = "The ID of the board")]
    pub board_id: String,

    #[schemars(description = "The ID of the column to update")]
    pub column_id: String,

    #[schemars(description = "The new name of the column")]
    pub name: Option<String>,

    #[schemars(description = "The new color of the column")]
    pub color: Option<ColumnColor>,
}
