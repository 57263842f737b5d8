//! Comment handler implementations

use serde::Serialize;

use crate::fizzy::{FizzyClient, FizzyResult};
use crate::params::{CardNumberParams, CommentIdParams, CreateCommentParams, UpdateCommentParams};
use crate::types::{Comment, Created, Remote};

#[derive(Debug, Serialize)]
struct CommentEnvelope<'a> {
    comment: CommentFields<'a>,
}

#[derive(Debug, Serialize)]
struct CommentFields<'a> {
    body: &'a str,
}

fn comments_path(card_number: u64) -> String {
    format!("/cards/{}/comments", card_number)
}

/// Comments on a card, oldest first
pub async fn list_comments(
    client: &FizzyClient,
    params: CardNumberParams,
) -> FizzyResult<Remote<Vec<Comment>>> {
    Ok(client.get(&comments_path(params.card_number)).await?.data)
}

pub async fn get_comment(
    client: &FizzyClient,
    params: CommentIdParams,
) -> FizzyResult<Remote<Comment>> {
    Ok(client
        .get(&format!("{}/{}", comments_path(params.card_number), params.comment_id))
        .await?
        .data)
}

pub async fn create_comment(
    client: &FizzyClient,
    params: CreateCommentParams,
) -> FizzyResult<Option<Created>> {
    let body = CommentEnvelope {
        comment: CommentFields { body: &params.body },
    };
    Ok(client
        .post(&comments_path(params.card_number), &body)
        .await?
        .data)
}

pub async fn update_comment(
    client: &FizzyClient,
    params: UpdateCommentParams,
) -> FizzyResult<Option<Remote<Comment>>> {
    let body = CommentEnvelope {
        comment: CommentFields { body: &params.body },
    };
    Ok(client
        .put(
            &format!("{}/{}", comments_path(params.card_number), params.comment_id),
            &body,
        )
        .await?
        .data)
}

pub async fn delete_comment(client: &FizzyClient, params: CommentIdParams) -> FizzyResult<()> {
    client
        .delete(&format!("{}/{}", comments_path(params.card_number), params.comment_id))
        .await?;
    Ok(())
}
