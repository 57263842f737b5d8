//! In-process tool dispatch
//!
//! [`EmbeddableMcp`] is the name-keyed face of a server: the ordered list of
//! tool descriptors it advertises, and a `call_tool` that routes an untyped
//! JSON argument bag to the matching typed handler. The stdio front-end and
//! embedding hosts both go through it, so both see the same errors.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Errors produced while routing a tool call
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with this name is registered
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The argument bag could not be coerced into the tool's parameter type
    #[error("invalid arguments: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// The tool ran and failed; the message is passed through verbatim
    #[error("{0}")]
    ToolFailed(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::ToolFailed(err.message.to_string())
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// A server whose tools can be listed and invoked by name without a transport
///
/// Implementations hold no per-call state, so `call_tool` may be awaited from
/// any task.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used in MCP configuration files
    fn server_name(&self) -> &str;

    /// Every tool descriptor, in registry order
    fn list_tools(&self) -> Vec<Tool>;

    /// Route `name` + `params` to the matching handler
    ///
    /// Fails with [`EmbeddableError::UnknownTool`] when `name` is not in
    /// [`list_tools`](Self::list_tools).
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}
