//! MCP Server implementation
//!
//! Exposes the Fizzy API as `fizzy_*` tools. Handler implementations live in
//! the handlers/ module; this file only declares the tool catalogue and routes
//! calls by name.
//!
//! `ServerHandler` is implemented by hand rather than through
//! `#[tool_handler]` so that `tools/list` keeps catalogue order and every
//! failure, unknown tool included, comes back as an `is_error` result.

use mcp_common::{
    async_trait, error_result, json_success, EmbeddableError, EmbeddableMcp, EmbeddableResult,
    McpError, ResultExt,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    tool, tool_router, RoleServer,
};
use serde::Serialize;
use serde_json::Value;

use crate::fizzy::{FizzyClient, FizzyResult};
use crate::handlers;
use crate::params::*;

const INSTRUCTIONS: &str = "Fizzy MCP Server - manage boards, cards, columns, comments, steps, \
     tags, users and notifications in a Fizzy account.";

/// Every tool, in the order `tools/list` reports them
pub const TOOL_NAMES: &[&str] = &[
    "fizzy_get_identity",
    "fizzy_list_boards",
    "fizzy_get_board",
    "fizzy_create_board",
    "fizzy_update_board",
    "fizzy_delete_board",
    "fizzy_list_cards",
    "fizzy_get_card",
    "fizzy_create_card",
    "fizzy_update_card",
    "fizzy_delete_card",
    "fizzy_close_card",
    "fizzy_reopen_card",
    "fizzy_move_to_not_now",
    "fizzy_triage_card",
    "fizzy_send_to_triage",
    "fizzy_toggle_assignment",
    "fizzy_toggle_tag",
    "fizzy_list_columns",
    "fizzy_get_column",
    "fizzy_create_column",
    "fizzy_update_column",
    "fizzy_delete_column",
    "fizzy_list_comments",
    "fizzy_get_comment",
    "fizzy_create_comment",
    "fizzy_update_comment",
    "fizzy_delete_comment",
    "fizzy_get_step",
    "fizzy_create_step",
    "fizzy_update_step",
    "fizzy_delete_step",
    "fizzy_list_tags",
    "fizzy_list_users",
    "fizzy_get_user",
    "fizzy_list_notifications",
    "fizzy_mark_notification_read",
    "fizzy_mark_notification_unread",
    "fizzy_mark_all_notifications_read",
];

/// Render a handler outcome as pretty JSON
fn reply<T: Serialize>(result: FizzyResult<T>) -> Result<CallToolResult, McpError> {
    json_success(&result.to_mcp_err()?)
}

/// The main Fizzy MCP Server
#[derive(Clone)]
pub struct FizzyMcpServer {
    client: FizzyClient,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl FizzyMcpServer {
    pub fn new(client: FizzyClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    // ---- Identity ----------------------------------------------------------

    #[tool(
        description = "Get the current user's identity and list of accounts they have access to"
    )]
    async fn fizzy_get_identity(&self) -> Result<CallToolResult, McpError> {
        reply(handlers::identity::get_identity(&self.client).await)
    }

    // ---- Boards ------------------------------------------------------------

    #[tool(description = "List all boards you have access to in the account")]
    async fn fizzy_list_boards(&self) -> Result<CallToolResult, McpError> {
        reply(handlers::board::list_boards(&self.client).await)
    }

    #[tool(description = "Get details of a specific board")]
    async fn fizzy_get_board(
        &self,
        Parameters(params): Parameters<BoardIdParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::board::get_board(&self.client, params).await)
    }

    #[tool(description = "Create a new board")]
    async fn fizzy_create_board(
        &self,
        Parameters(params): Parameters<CreateBoardParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::board::create_board(&self.client, params).await)
    }

    #[tool(description = "Update an existing board")]
    async fn fizzy_update_board(
        &self,
        Parameters(params): Parameters<UpdateBoardParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::board::update_board(&self.client, params).await)
    }

    #[tool(description = "Delete a board (only board administrators can delete)")]
    async fn fizzy_delete_board(
        &self,
        Parameters(params): Parameters<BoardIdParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::board::delete_board(&self.client, params).await)
    }

    // ---- Cards -------------------------------------------------------------

    #[tool(description = "List cards with optional filtering. Returns paginated results.")]
    async fn fizzy_list_cards(
        &self,
        Parameters(params): Parameters<ListCardsParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::card::list_cards(&self.client, params).await)
    }

    #[tool(description = "Get details of a specific card by its number")]
    async fn fizzy_get_card(
        &self,
        Parameters(params): Parameters<CardNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::card::get_card(&self.client, params).await)
    }

    #[tool(description = "Create a new card on a board")]
    async fn fizzy_create_card(
        &self,
        Parameters(params): Parameters<CreateCardParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::card::create_card(&self.client, params).await)
    }

    #[tool(description = "Update an existing card")]
    async fn fizzy_update_card(
        &self,
        Parameters(params): Parameters<UpdateCardParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::card::update_card(&self.client, params).await)
    }

    #[tool(description = "Delete a card (only card creator or board administrators can delete)")]
    async fn fizzy_delete_card(
        &self,
        Parameters(params): Parameters<CardNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::card::delete_card(&self.client, params).await)
    }

    #[tool(description = "Close a card (mark as done)")]
    async fn fizzy_close_card(
        &self,
        Parameters(params): Parameters<CardNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::card::close_card(&self.client, params).await)
    }

    #[tool(description = "Reopen a closed card")]
    async fn fizzy_reopen_card(
        &self,
        Parameters(params): Parameters<CardNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::card::reopen_card(&self.client, params).await)
    }

    #[tool(description = "Move a card to 'Not Now' status (postpone)")]
    async fn fizzy_move_to_not_now(
        &self,
        Parameters(params): Parameters<CardNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::card::move_to_not_now(&self.client, params).await)
    }

    #[tool(description = "Move a card from triage into a column")]
    async fn fizzy_triage_card(
        &self,
        Parameters(params): Parameters<TriageCardParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::card::triage_card(&self.client, params).await)
    }

    #[tool(description = "Send a card back to triage")]
    async fn fizzy_send_to_triage(
        &self,
        Parameters(params): Parameters<CardNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::card::send_to_triage(&self.client, params).await)
    }

    #[tool(description = "Toggle assignment of a user to/from a card")]
    async fn fizzy_toggle_assignment(
        &self,
        Parameters(params): Parameters<ToggleAssignmentParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::card::toggle_assignment(&self.client, params).await)
    }

    #[tool(
        description = "Toggle a tag on or off for a card. Creates the tag if it doesn't exist."
    )]
    async fn fizzy_toggle_tag(
        &self,
        Parameters(params): Parameters<ToggleTagParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::card::toggle_tag(&self.client, params).await)
    }

    // ---- Columns -----------------------------------------------------------

    #[tool(description = "List all columns on a board, sorted by position")]
    async fn fizzy_list_columns(
        &self,
        Parameters(params): Parameters<BoardIdParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::column::list_columns(&self.client, params).await)
    }

    #[tool(description = "Get details of a specific column")]
    async fn fizzy_get_column(
        &self,
        Parameters(params): Parameters<ColumnIdParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::column::get_column(&self.client, params).await)
    }

    #[tool(description = "Create a new column on a board")]
    async fn fizzy_create_column(
        &self,
        Parameters(params): Parameters<CreateColumnParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::column::create_column(&self.client, params).await)
    }

    #[tool(description = "Update an existing column")]
    async fn fizzy_update_column(
        &self,
        Parameters(params): Parameters<UpdateColumnParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::column::update_column(&self.client, params).await)
    }

    #[tool(description = "Delete a column from a board")]
    async fn fizzy_delete_column(
        &self,
        Parameters(params): Parameters<ColumnIdParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::column::delete_column(&self.client, params).await)
    }

    // ---- Comments ----------------------------------------------------------

    #[tool(description = "List all comments on a card, sorted chronologically (oldest first)")]
    async fn fizzy_list_comments(
        &self,
        Parameters(params): Parameters<CardNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::comment::list_comments(&self.client, params).await)
    }

    #[tool(description = "Get details of a specific comment")]
    async fn fizzy_get_comment(
        &self,
        Parameters(params): Parameters<CommentIdParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::comment::get_comment(&self.client, params).await)
    }

    #[tool(description = "Create a new comment on a card")]
    async fn fizzy_create_comment(
        &self,
        Parameters(params): Parameters<CreateCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::comment::create_comment(&self.client, params).await)
    }

    #[tool(description = "Update an existing comment (only the creator can update)")]
    async fn fizzy_update_comment(
        &self,
        Parameters(params): Parameters<UpdateCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::comment::update_comment(&self.client, params).await)
    }

    #[tool(description = "Delete a comment (only the creator can delete)")]
    async fn fizzy_delete_comment(
        &self,
        Parameters(params): Parameters<CommentIdParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::comment::delete_comment(&self.client, params).await)
    }

    // ---- Steps -------------------------------------------------------------

    #[tool(description = "Get details of a specific step (to-do item) on a card")]
    async fn fizzy_get_step(
        &self,
        Parameters(params): Parameters<StepIdParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::step::get_step(&self.client, params).await)
    }

    #[tool(description = "Create a new step (to-do item) on a card")]
    async fn fizzy_create_step(
        &self,
        Parameters(params): Parameters<CreateStepParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::step::create_step(&self.client, params).await)
    }

    #[tool(description = "Update an existing step")]
    async fn fizzy_update_step(
        &self,
        Parameters(params): Parameters<UpdateStepParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::step::update_step(&self.client, params).await)
    }

    #[tool(description = "Delete a step from a card")]
    async fn fizzy_delete_step(
        &self,
        Parameters(params): Parameters<StepIdParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::step::delete_step(&self.client, params).await)
    }

    // ---- Tags & users ------------------------------------------------------

    #[tool(description = "List all tags in the account, sorted alphabetically")]
    async fn fizzy_list_tags(&self) -> Result<CallToolResult, McpError> {
        reply(handlers::tag::list_tags(&self.client).await)
    }

    #[tool(description = "List all active users in the account")]
    async fn fizzy_list_users(&self) -> Result<CallToolResult, McpError> {
        reply(handlers::user::list_users(&self.client).await)
    }

    #[tool(description = "Get details of a specific user")]
    async fn fizzy_get_user(
        &self,
        Parameters(params): Parameters<UserIdParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::user::get_user(&self.client, params).await)
    }

    // ---- Notifications -----------------------------------------------------

    #[tool(
        description = "List notifications for the current user. Unread notifications are returned first."
    )]
    async fn fizzy_list_notifications(&self) -> Result<CallToolResult, McpError> {
        reply(handlers::notification::list_notifications(&self.client).await)
    }

    #[tool(description = "Mark a notification as read")]
    async fn fizzy_mark_notification_read(
        &self,
        Parameters(params): Parameters<NotificationIdParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::notification::mark_notification_read(&self.client, params).await)
    }

    #[tool(description = "Mark a notification as unread")]
    async fn fizzy_mark_notification_unread(
        &self,
        Parameters(params): Parameters<NotificationIdParams>,
    ) -> Result<CallToolResult, McpError> {
        reply(handlers::notification::mark_notification_unread(&self.client, params).await)
    }

    #[tool(description = "Mark all unread notifications as read")]
    async fn fizzy_mark_all_notifications_read(&self) -> Result<CallToolResult, McpError> {
        reply(handlers::notification::mark_all_notifications_read(&self.client).await)
    }
}

// ============================================================================
// Registry & Dispatch
// ============================================================================

impl FizzyMcpServer {
    /// Tool descriptors in [`TOOL_NAMES`] order
    pub fn registry(&self) -> Vec<Tool> {
        let mut tools = self.tool_router.list_all();
        tools.sort_by_key(|tool| {
            TOOL_NAMES
                .iter()
                .position(|name| *name == tool.name.as_ref())
                .unwrap_or(usize::MAX)
        });
        tools
    }

    /// Decode `params` for the tool called `name` and run it
    pub async fn dispatch(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "fizzy_get_identity" => self.fizzy_get_identity().await.map_err(Into::into),

            "fizzy_list_boards" => self.fizzy_list_boards().await.map_err(Into::into),
            "fizzy_get_board" => {
                let params: BoardIdParams = serde_json::from_value(params)?;
                self.fizzy_get_board(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_create_board" => {
                let params: CreateBoardParams = serde_json::from_value(params)?;
                self.fizzy_create_board(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_update_board" => {
                let params: UpdateBoardParams = serde_json::from_value(params)?;
                self.fizzy_update_board(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_delete_board" => {
                let params: BoardIdParams = serde_json::from_value(params)?;
                self.fizzy_delete_board(Parameters(params)).await.map_err(Into::into)
            }

            "fizzy_list_cards" => {
                let params: ListCardsParams = serde_json::from_value(params)?;
                self.fizzy_list_cards(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_get_card" => {
                let params: CardNumberParams = serde_json::from_value(params)?;
                self.fizzy_get_card(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_create_card" => {
                let params: CreateCardParams = serde_json::from_value(params)?;
                self.fizzy_create_card(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_update_card" => {
                let params: UpdateCardParams = serde_json::from_value(params)?;
                self.fizzy_update_card(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_delete_card" => {
                let params: CardNumberParams = serde_json::from_value(params)?;
                self.fizzy_delete_card(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_close_card" => {
                let params: CardNumberParams = serde_json::from_value(params)?;
                self.fizzy_close_card(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_reopen_card" => {
                let params: CardNumberParams = serde_json::from_value(params)?;
                self.fizzy_reopen_card(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_move_to_not_now" => {
                let params: CardNumberParams = serde_json::from_value(params)?;
                self.fizzy_move_to_not_now(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_triage_card" => {
                let params: TriageCardParams = serde_json::from_value(params)?;
                self.fizzy_triage_card(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_send_to_triage" => {
                let params: CardNumberParams = serde_json::from_value(params)?;
                self.fizzy_send_to_triage(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_toggle_assignment" => {
                let params: ToggleAssignmentParams = serde_json::from_value(params)?;
                self.fizzy_toggle_assignment(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_toggle_tag" => {
                let params: ToggleTagParams = serde_json::from_value(params)?;
                self.fizzy_toggle_tag(Parameters(params)).await.map_err(Into::into)
            }

            "fizzy_list_columns" => {
                let params: BoardIdParams = serde_json::from_value(params)?;
                self.fizzy_list_columns(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_get_column" => {
                let params: ColumnIdParams = serde_json::from_value(params)?;
                self.fizzy_get_column(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_create_column" => {
                let params: CreateColumnParams = serde_json::from_value(params)?;
                self.fizzy_create_column(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_update_column" => {
                let params: UpdateColumnParams = serde_json::from_value(params)?;
                self.fizzy_update_column(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_delete_column" => {
                let params: ColumnIdParams = serde_json::from_value(params)?;
                self.fizzy_delete_column(Parameters(params)).await.map_err(Into::into)
            }

            "fizzy_list_comments" => {
                let params: CardNumberParams = serde_json::from_value(params)?;
                self.fizzy_list_comments(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_get_comment" => {
                let params: CommentIdParams = serde_json::from_value(params)?;
                self.fizzy_get_comment(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_create_comment" => {
                let params: CreateCommentParams = serde_json::from_value(params)?;
                self.fizzy_create_comment(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_update_comment" => {
                let params: UpdateCommentParams = serde_json::from_value(params)?;
                self.fizzy_update_comment(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_delete_comment" => {
                let params: CommentIdParams = serde_json::from_value(params)?;
                self.fizzy_delete_comment(Parameters(params)).await.map_err(Into::into)
            }

            "fizzy_get_step" => {
                let params: StepIdParams = serde_json::from_value(params)?;
                self.fizzy_get_step(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_create_step" => {
                let params: CreateStepParams = serde_json::from_value(params)?;
                self.fizzy_create_step(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_update_step" => {
                let params: UpdateStepParams = serde_json::from_value(params)?;
                self.fizzy_update_step(Parameters(params)).await.map_err(Into::into)
            }
            "fizzy_delete_step" => {
                let params: StepIdParams = serde_json::from_value(params)?;
                self.fizzy_delete_step(Parameters(params)).await.map_err(Into::into)
            }

            "fizzy_list_tags" => self.fizzy_list_tags().await.map_err(Into::into),

            "fizzy_list_users" => self.fizzy_list_users().await.map_err(Into::into),
            "fizzy_get_user" => {
                let params: UserIdParams = serde_json::from_value(params)?;
                self.fizzy_get_user(Parameters(params)).await.map_err(Into::into)
            }

            "fizzy_list_notifications" => self.fizzy_list_notifications().await.map_err(Into::into),
            "fizzy_mark_notification_read" => {
                let params: NotificationIdParams = serde_json::from_value(params)?;
                self.fizzy_mark_notification_read(Parameters(params))
                    .await
                    .map_err(Into::into)
            }
            "fizzy_mark_notification_unread" => {
                let params: NotificationIdParams = serde_json::from_value(params)?;
                self.fizzy_mark_notification_unread(Parameters(params))
                    .await
                    .map_err(Into::into)
            }
            "fizzy_mark_all_notifications_read" => self
                .fizzy_mark_all_notifications_read()
                .await
                .map_err(Into::into),

            _ => Err(EmbeddableError::UnknownTool(name.to_string())),
        }
    }

    /// Run a tool and fold any failure into an `is_error` result
    pub async fn handle_call(&self, name: &str, params: Value) -> CallToolResult {
        tracing::info!(tool = %name, "Calling tool");
        match self.dispatch(name, params).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(tool = %name, error = %e, "Tool call failed");
                error_result(e)
            }
        }
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

impl rmcp::ServerHandler for FizzyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.registry()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let params = Value::Object(request.arguments.unwrap_or_default());
        Ok(self.handle_call(&request.name, params).await)
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for FizzyMcpServer {
    fn server_name(&self) -> &str {
        "fizzy"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.registry()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        self.dispatch(name, params).await
    }
}
