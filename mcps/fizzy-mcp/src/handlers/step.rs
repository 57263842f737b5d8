//! Step handler implementations
//!
//! Steps are only reachable through their card; Fizzy has no step listing.

use serde::Serialize;

use crate::fizzy::{FizzyClient, FizzyResult};
use crate::params::{CreateStepParams, StepIdParams, UpdateStepParams};
use crate::types::{Created, Remote, Step};

#[derive(Debug, Serialize)]
struct StepFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
}

#[derive(Debug, Serialize)]
struct StepEnvelope<'a> {
    step: StepFields<'a>,
}

fn step_path(card_number: u64, step_id: &str) -> String {
    format!("/cards/{}/steps/{}", card_number, step_id)
}

pub async fn get_step(client: &FizzyClient, params: StepIdParams) -> FizzyResult<Remote<Step>> {
    Ok(client
        .get(&step_path(params.card_number, &params.step_id))
        .await?
        .data)
}

pub async fn create_step(
    client: &FizzyClient,
    params: CreateStepParams,
) -> FizzyResult<Option<Created>> {
    let body = StepEnvelope {
        step: StepFields {
            content: Some(&params.content),
            completed: params.completed,
        },
    };
    Ok(client
        .post(&format!("/cards/{}/steps", params.card_number), &body)
        .await?
        .data)
}

pub async fn update_step(
    client: &FizzyClient,
    params: UpdateStepParams,
) -> FizzyResult<Option<Remote<Step>>> {
    let body = StepEnvelope {
        step: StepFields {
            content: params.content.as_deref(),
            completed: params.completed,
        },
    };
    Ok(client
        .put(&step_path(params.card_number, &params.step_id), &body)
        .await?
        .data)
}

pub async fn delete_step(client: &FizzyClient, params: StepIdParams) -> FizzyResult<()> {
    client
        .delete(&step_path(params.card_number, &params.step_id))
        .await?;
    Ok(())
}
