//! Column handler implementations

use serde::Serialize;

use crate::fizzy::{FizzyClient, FizzyResult};
use crate::params::{
    BoardIdParams, ColumnColor, ColumnIdParams, CreateColumnParams, UpdateColumnParams,
};
use crate::types::{Column, Created, Remote};

#[derive(Debug, Serialize)]
struct ColumnFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<ColumnColor>,
}

#[derive(Debug, Serialize)]
struct ColumnEnvelope<'a> {
    column: ColumnFields<'a>,
}

fn columns_path(board_id: &str) -> String {
    format!("/boards/{}/columns", board_id)
}

/// Columns of a board, in board order
pub async fn list_columns(
    client: &FizzyClient,
    params: BoardIdParams,
) -> FizzyResult<Remote<Vec<Column>>> {
    Ok(client.get(&columns_path(&params.board_id)).await?.data)
}

pub async fn get_column(
    client: &FizzyClient,
    params: ColumnIdParams,
) -> FizzyResult<Remote<Column>> {
    Ok(client
        .get(&format!("{}/{}", columns_path(&params.board_id), params.column_id))
        .await?
        .data)
}

pub async fn create_column(
    client: &FizzyClient,
    params: CreateColumnParams,
) -> FizzyResult<Option<Created>> {
    let body = ColumnEnvelope {
        column: ColumnFields {
            name: Some(&params.name),
            color: params.color,
        },
    };
    Ok(client
        .post(&columns_path(&params.board_id), &body)
        .await?
        .data)
}

pub async fn update_column(client: &FizzyClient, params: UpdateColumnParams) -> FizzyResult<()> {
    let body = ColumnEnvelope {
        column: ColumnFields {
            name: params.name.as_deref(),
            color: params.color,
        },
    };
    client
        .put::<_, serde_json::Value>(
            &format!("{}/{}", columns_path(&params.board_id), params.column_id),
            &body,
        )
        .await?;
    Ok(())
}

pub async fn delete_column(client: &FizzyClient, params: ColumnIdParams) -> FizzyResult<()> {
    client
        .delete(&format!("{}/{}", columns_path(&params.board_id), params.column_id))
        .await?;
    Ok(())
}
