//! Tag handler

use crate::fizzy::{FizzyClient, FizzyResult};
use crate::types::{Remote, Tag};

/// All tags in the account, alphabetical
pub async fn list_tags(client: &FizzyClient) -> FizzyResult<Remote<Vec<Tag>>> {
    Ok(client.get("/tags").await?.data)
}
