//! Identity handler

use crate::fizzy::{FizzyClient, FizzyResult};
use crate::types::{Identity, Remote};

/// The token holder and every account they can reach
pub async fn get_identity(client: &FizzyClient) -> FizzyResult<Remote<Identity>> {
    Ok(client.get("/my/identity").await?.data)
}
