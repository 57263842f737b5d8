//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] routes logs to stderr, keeping stdout
//!   free for the protocol stream
//! - **Results**: helpers for building `CallToolResult` values, including
//!   error results flagged `is_error`
//! - **Errors**: [`IntoMcpError`] / [`ResultExt`] for `?` inside tool bodies
//! - **Embeddable**: [`EmbeddableMcp`], the name-based dispatch surface a
//!   server exposes for in-process calls
//!
//! ```rust,ignore
//! use mcp_common::{json_success, EmbeddableMcp};
//!
//! let tools = server.list_tools();
//! let result = server.call_tool("fizzy_list_boards", serde_json::json!({})).await?;
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, IntoMcpError, McpResult, ResultExt};
pub use init::{init_tracing, LogFormat};
pub use result::{error_result, json_success, text_success};

pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
