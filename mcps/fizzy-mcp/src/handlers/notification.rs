//! Notification handler implementations
//!
//! Read state is the `reading` sub-resource: POST marks read, DELETE marks
//! unread.

use super::post_action;
use crate::fizzy::{FizzyClient, FizzyResult};
use crate::params::NotificationIdParams;
use crate::types::{Notification, Remote};

fn reading_path(notification_id: &str) -> String {
    format!("/notifications/{}/reading", notification_id)
}

/// Notifications for the token holder, unread first
pub async fn list_notifications(client: &FizzyClient) -> FizzyResult<Remote<Vec<Notification>>> {
    Ok(client.get("/notifications").await?.data)
}

pub async fn mark_notification_read(
    client: &FizzyClient,
    params: NotificationIdParams,
) -> FizzyResult<()> {
    post_action(client, &reading_path(&params.notification_id)).await
}

pub async fn mark_notification_unread(
    client: &FizzyClient,
    params: NotificationIdParams,
) -> FizzyResult<()> {
    client.delete(&reading_path(&params.notification_id)).await?;
    Ok(())
}

pub async fn mark_all_notifications_read(client: &FizzyClient) -> FizzyResult<()> {
    post_action(client, "/notifications/bulk_reading").await
}
