//! Handler implementations for Fizzy MCP tools
//!
//! One function per tool. Each builds a path, wraps body fields in the
//! resource-named envelope Fizzy expects (`{"card": {...}}`), and makes one
//! call through [`FizzyClient`]. Filtering, ordering and permissions are the
//! backend's business.

pub mod board;
pub mod card;
pub mod column;
pub mod comment;
pub mod identity;
pub mod notification;
pub mod step;
pub mod tag;
pub mod user;

use mcp_common::{internal_error, IntoMcpError, McpError};
use serde::Serialize;
use serde_json::Value;

use crate::fizzy::{FizzyClient, FizzyError, FizzyResult};

impl IntoMcpError for FizzyError {
    fn into_mcp_error(self) -> McpError {
        internal_error(self.to_string())
    }
}

/// POST to an action endpoint, discarding whatever comes back
async fn post_action(client: &FizzyClient, path: &str) -> FizzyResult<()> {
    client.post_empty::<Value>(path).await?;
    Ok(())
}

/// POST an action that carries a small body, discarding the response
async fn post_action_with<B: Serialize + ?Sized>(
    client: &FizzyClient,
    path: &str,
    body: &B,
) -> FizzyResult<()> {
    client.post::<B, Value>(path, body).await?;
    Ok(())
}
