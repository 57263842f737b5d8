//! Types shared across Fizzy resources

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A backend response body, kept exactly as received
///
/// Serializes back to the JSON the backend sent: unknown fields, explicit
/// `null`s and timestamp formatting all survive. `T` names the shape the body
/// is expected to have; [`Remote::decode`] reads it as that shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Remote<T> {
    value: Value,
    #[serde(skip)]
    shape: PhantomData<T>,
}

impl<T> Remote<T> {
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

impl<T: DeserializeOwned> Remote<T> {
    /// Read the body as `T`; fields `T` does not know are ignored
    pub fn decode(&self) -> serde_json::Result<T> {
        T::deserialize(&self.value)
    }
}

impl<T> From<Value> for Remote<T> {
    fn from(value: Value) -> Self {
        Self {
            value,
            shape: PhantomData,
        }
    }
}

/// A Fizzy user (board creator, card creator, comment author, assignee)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,

    pub name: String,

    /// Account role (e.g. "owner", "member")
    pub role: String,

    pub active: bool,

    pub email_address: Option<String>,

    pub created_at: Option<DateTime<Utc>>,

    /// API URL of the user
    pub url: String,
}

/// Result of a create call: where the new resource lives
///
/// The backend answers creates with `201 Created` and a `Location` header
/// instead of a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remote_reserializes_verbatim() {
        let body = json!({
            "id": "u1",
            "name": null,
            "created_at": "2025-12-05T19:36:35+00:00",
            "avatar_url": "https://fizzy.local/u1.png"
        });
        let user: Remote<User> = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(serde_json::to_value(&user).unwrap(), body);
        assert_eq!(user.as_value()["avatar_url"], "https://fizzy.local/u1.png");
    }

    #[test]
    fn test_remote_decodes_known_fields() {
        let user: Remote<User> = Remote::from(json!({
            "id": "u1",
            "name": "Jason",
            "role": "member",
            "active": true,
            "extra": [1, 2, 3]
        }));
        let decoded = user.decode().unwrap();
        assert_eq!(decoded.name, "Jason");
        assert!(decoded.active);
    }

    #[test]
    fn test_remote_list_keeps_order() {
        let users: Remote<Vec<User>> = Remote::from(json!([{ "id": "b" }, { "id": "a" }]));
        let ids: Vec<String> = users.decode().unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, ["b", "a"]);
    }
}
