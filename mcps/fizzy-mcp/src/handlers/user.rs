//! User handler implementations

use crate::fizzy::{FizzyClient, FizzyResult};
use crate::params::UserIdParams;
use crate::types::{Remote, User};

/// Active users in the account
pub async fn list_users(client: &FizzyClient) -> FizzyResult<Remote<Vec<User>>> {
    Ok(client.get("/users").await?.data)
}

pub async fn get_user(client: &FizzyClient, params: UserIdParams) -> FizzyResult<Remote<User>> {
    Ok(client
        .get(&format!("/users/{}", params.user_id))
        .await?
        .data)
}
