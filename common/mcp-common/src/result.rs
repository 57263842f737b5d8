//! `CallToolResult` builders

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

/// Pretty-printed JSON of `data` as a single text item
///
/// Unit and `None` serialize to `null`.
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// An application failure reported inside a successful protocol response
///
/// The text is `Error: <message>` and `is_error` is set, so the calling agent
/// sees the failure without the transport treating it as a fault.
pub fn error_result(message: impl std::fmt::Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", message))])
}
