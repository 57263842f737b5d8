//! Board handler implementations

use serde::Serialize;

use crate::fizzy::{FizzyClient, FizzyResult};
use crate::params::{BoardIdParams, CreateBoardParams, UpdateBoardParams};
use crate::types::{Board, Created, Remote};

#[derive(Debug, Serialize)]
struct BoardFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_postpone_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_ids: Option<&'a [String]>,
}

#[derive(Debug, Serialize)]
struct BoardEnvelope<'a> {
    board: BoardFields<'a>,
}

pub async fn list_boards(client: &FizzyClient) -> FizzyResult<Remote<Vec<Board>>> {
    Ok(client.get("/boards").await?.data)
}

pub async fn get_board(client: &FizzyClient, params: BoardIdParams) -> FizzyResult<Remote<Board>> {
    Ok(client
        .get(&format!("/boards/{}", params.board_id))
        .await?
        .data)
}

pub async fn create_board(
    client: &FizzyClient,
    params: CreateBoardParams,
) -> FizzyResult<Option<Created>> {
    let body = BoardEnvelope {
        board: BoardFields {
            name: Some(&params.name),
            all_access: params.all_access,
            auto_postpone_period: params.auto_postpone_period,
            public_description: params.public_description.as_deref(),
            user_ids: None,
        },
    };
    Ok(client.post("/boards", &body).await?.data)
}

pub async fn update_board(client: &FizzyClient, params: UpdateBoardParams) -> FizzyResult<()> {
    let body = BoardEnvelope {
        board: BoardFields {
            name: params.name.as_deref(),
            all_access: params.all_access,
            auto_postpone_period: params.auto_postpone_period,
            public_description: params.public_description.as_deref(),
            user_ids: params.user_ids.as_deref(),
        },
    };
    client
        .put::<_, serde_json::Value>(&format!("/boards/{}", params.board_id), &body)
        .await?;
    Ok(())
}

/// Delete a board (board administrators only; enforced by Fizzy)
pub async fn delete_board(client: &FizzyClient, params: BoardIdParams) -> FizzyResult<()> {
    client
        .delete(&format!("/boards/{}", params.board_id))
        .await?;
    Ok(())
}
