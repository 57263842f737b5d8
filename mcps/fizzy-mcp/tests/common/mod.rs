//! In-process stand-in for the Fizzy API
//!
//! Binds an axum router on an ephemeral localhost port, records every request
//! it receives and answers each one with the same canned response.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use fizzy_mcp::{Config, FizzyClient, FizzyMcpServer};
use rmcp::model::{CallToolResult, RawContent};

pub const ACCOUNT_ID: &str = "897362094";
pub const TOKEN: &str = "test-token";

/// A request as the backend saw it
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// The response every request gets
#[derive(Debug, Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl Canned {
    pub fn json(status: StatusCode, body: serde_json::Value) -> Self {
        Self {
            status,
            headers: vec![("content-type", "application/json".to_string())],
            body: body.to_string(),
        }
    }

    pub fn text(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self::text(status, "")
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }
}

struct Shared {
    canned: Canned,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockBackend {
    pub base_url: String,
    shared: Arc<Shared>,
}

impl MockBackend {
    pub async fn start(canned: Canned) -> Self {
        let shared = Arc::new(Shared {
            canned,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(record).with_state(shared.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            shared,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {:?}", requests);
        requests.into_iter().next().unwrap()
    }

    pub fn config(&self) -> Config {
        Config::new(&self.base_url, ACCOUNT_ID, TOKEN)
    }

    pub fn client(&self) -> FizzyClient {
        FizzyClient::new(self.config()).unwrap()
    }

    pub fn server(&self) -> FizzyMcpServer {
        FizzyMcpServer::new(self.client())
    }

    /// `path` as seen by the backend for an account-scoped call
    pub fn account_path(path: &str) -> String {
        format!("/{}{}", ACCOUNT_ID, path)
    }
}

async fn record(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    shared.requests.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let canned = &shared.canned;
    let mut response = (canned.status, canned.body.clone()).into_response();
    for (name, value) in &canned.headers {
        response
            .headers_mut()
            .insert(*name, HeaderValue::from_str(value).unwrap());
    }
    response
}

/// First text item of a tool result
pub fn text_of(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        RawContent::Text(t) => t.text.clone(),
        _ => String::new(),
    }
}
