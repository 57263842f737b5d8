//! Notification type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::User;

/// A notification for the token holder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub id: String,

    pub read: bool,

    /// When the notification was read; `None` while unread
    pub read_at: Option<DateTime<Utc>>,

    pub created_at: Option<DateTime<Utc>>,

    pub title: String,

    pub body: String,

    pub creator: Option<User>,

    pub card: Option<NotificationCard>,

    pub url: String,
}

/// The card summary embedded in a notification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationCard {
    pub id: String,
    pub title: String,
    pub status: String,
    pub url: String,
}
