//! Card handler implementations
//!
//! State changes that are not field edits are sub-resources on the card:
//! `closure`, `not_now` and `triage` exist (POST) or not (DELETE).
//! `assignments` and `taggings` are toggles; whether a POST adds or removes is
//! decided by Fizzy, so no state is read first.

use serde::Serialize;
use serde_json::json;
use url::form_urlencoded::byte_serialize;

use super::{post_action, post_action_with};
use crate::fizzy::{FizzyClient, FizzyResult};
use crate::params::{
    CardNumberParams, CardStatus, CreateCardParams, ListCardsParams, ToggleAssignmentParams,
    ToggleTagParams, TriageCardParams, UpdateCardParams,
};
use crate::types::{Card, Created, Remote};

#[derive(Debug, Serialize)]
struct CardFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<CardStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag_ids: Option<&'a [String]>,
}

#[derive(Debug, Serialize)]
struct CardEnvelope<'a> {
    card: CardFields<'a>,
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// Query string for a card listing, including the leading `?`
///
/// List filters repeat as `key[]=value`; the order is fixed so identical
/// filters always produce identical URLs.
pub fn cards_query(params: &ListCardsParams) -> String {
    let mut parts: Vec<String> = Vec::new();

    let lists = [
        ("board_ids", &params.board_ids),
        ("tag_ids", &params.tag_ids),
        ("assignee_ids", &params.assignee_ids),
        ("creator_ids", &params.creator_ids),
    ];
    for (key, values) in lists {
        for value in values.iter().flatten() {
            parts.push(format!("{}[]={}", key, encode(value)));
        }
    }

    if let Some(index) = params.indexed_by {
        parts.push(format!("indexed_by={}", index.as_str()));
    }
    if let Some(sort) = params.sorted_by {
        parts.push(format!("sorted_by={}", sort.as_str()));
    }
    for term in params.terms.iter().flatten() {
        parts.push(format!("terms[]={}", encode(term)));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

fn card_path(number: u64) -> String {
    format!("/cards/{}", number)
}

pub async fn list_cards(
    client: &FizzyClient,
    params: ListCardsParams,
) -> FizzyResult<Remote<Vec<Card>>> {
    Ok(client
        .get(&format!("/cards{}", cards_query(&params)))
        .await?
        .data)
}

pub async fn get_card(client: &FizzyClient, params: CardNumberParams) -> FizzyResult<Remote<Card>> {
    Ok(client.get(&card_path(params.card_number)).await?.data)
}

pub async fn create_card(
    client: &FizzyClient,
    params: CreateCardParams,
) -> FizzyResult<Option<Created>> {
    let body = CardEnvelope {
        card: CardFields {
            title: Some(&params.title),
            description: params.description.as_deref(),
            status: params.status,
            tag_ids: params.tag_ids.as_deref(),
        },
    };
    Ok(client
        .post(&format!("/boards/{}/cards", params.board_id), &body)
        .await?
        .data)
}

/// Update a card; the card comes back when Fizzy returns a body
pub async fn update_card(
    client: &FizzyClient,
    params: UpdateCardParams,
) -> FizzyResult<Option<Remote<Card>>> {
    let body = CardEnvelope {
        card: CardFields {
            title: params.title.as_deref(),
            description: params.description.as_deref(),
            status: params.status,
            tag_ids: params.tag_ids.as_deref(),
        },
    };
    Ok(client
        .put(&card_path(params.card_number), &body)
        .await?
        .data)
}

pub async fn delete_card(client: &FizzyClient, params: CardNumberParams) -> FizzyResult<()> {
    client.delete(&card_path(params.card_number)).await?;
    Ok(())
}

pub async fn close_card(client: &FizzyClient, params: CardNumberParams) -> FizzyResult<()> {
    post_action(client, &format!("{}/closure", card_path(params.card_number))).await
}

pub async fn reopen_card(client: &FizzyClient, params: CardNumberParams) -> FizzyResult<()> {
    client
        .delete(&format!("{}/closure", card_path(params.card_number)))
        .await?;
    Ok(())
}

pub async fn move_to_not_now(client: &FizzyClient, params: CardNumberParams) -> FizzyResult<()> {
    post_action(client, &format!("{}/not_now", card_path(params.card_number))).await
}

/// Move a card out of triage into `column_id`
pub async fn triage_card(client: &FizzyClient, params: TriageCardParams) -> FizzyResult<()> {
    post_action_with(
        client,
        &format!("{}/triage", card_path(params.card_number)),
        &json!({ "column_id": params.column_id }),
    )
    .await
}

/// Take a card out of its column and back to triage
pub async fn send_to_triage(client: &FizzyClient, params: CardNumberParams) -> FizzyResult<()> {
    client
        .delete(&format!("{}/triage", card_path(params.card_number)))
        .await?;
    Ok(())
}

pub async fn toggle_assignment(
    client: &FizzyClient,
    params: ToggleAssignmentParams,
) -> FizzyResult<()> {
    post_action_with(
        client,
        &format!("{}/assignments", card_path(params.card_number)),
        &json!({ "assignee_id": params.assignee_id }),
    )
    .await
}

pub async fn toggle_tag(client: &FizzyClient, params: ToggleTagParams) -> FizzyResult<()> {
    post_action_with(
        client,
        &format!("{}/taggings", card_path(params.card_number)),
        &json!({ "tag_title": params.tag_title }),
    )
    .await
}
