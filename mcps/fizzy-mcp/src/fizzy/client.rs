//! Authenticated HTTP client for the Fizzy API
//!
//! Every request carries `Authorization: Bearer <token>`, `Accept` and
//! `Content-Type: application/json`. Paths are resolved against
//! `<base>/<account>`, except GETs under `/my/` which resolve against the bare
//! base address.
//!
//! One call, one request: no retries, no caching, no logging beyond debug
//! spans.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, LOCATION};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use super::error::{FizzyError, FizzyResult};
use crate::config::Config;

/// Paths with this prefix are account-independent
const IDENTITY_PREFIX: &str = "/my/";

/// A normalized 2xx response
#[derive(Debug)]
pub struct FizzyResponse<T> {
    pub data: T,
    pub status: u16,
    pub headers: HeaderMap,
}

/// Fizzy REST client bound to one account
#[derive(Clone)]
pub struct FizzyClient {
    http: Client,
    config: Config,
}

impl FizzyClient {
    pub fn new(config: Config) -> FizzyResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(concat!("fizzy-mcp/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { http, config })
    }

    fn account_url(&self, path: &str) -> String {
        format!("{}/{}{}", self.config.base_url, self.config.account_id, path)
    }

    fn read_url(&self, path: &str) -> String {
        if path.starts_with(IDENTITY_PREFIX) {
            format!("{}{}", self.config.base_url, path)
        } else {
            self.account_url(path)
        }
    }

    /// GET `path` and decode the JSON body
    #[instrument(level = "debug", skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> FizzyResult<FizzyResponse<T>> {
        let response = self
            .http
            .get(self.read_url(path))
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        let data = serde_json::from_slice(&bytes)?;

        Ok(FizzyResponse {
            data,
            status,
            headers,
        })
    }

    /// POST `path` with `body` serialized as JSON
    ///
    /// On 201/204 the body is never read: a `Location` header becomes
    /// `{"location": <value>}` decoded as `T`, otherwise the data is `None`.
    /// Any other 2xx body is decoded as `T`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> FizzyResult<FizzyResponse<Option<T>>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        self.send_post(path, Some(payload)).await
    }

    /// POST `path` with no body, for action endpoints
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> FizzyResult<FizzyResponse<Option<T>>> {
        self.send_post(path, None).await
    }

    #[instrument(level = "debug", skip(self, payload), fields(has_body = payload.is_some()))]
    async fn send_post<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: Option<Vec<u8>>,
    ) -> FizzyResult<FizzyResponse<Option<T>>> {
        let mut request = self
            .http
            .post(self.account_url(path))
            .bearer_auth(&self.config.access_token);
        if let Some(payload) = payload {
            request = request.body(payload);
        }
        let response = ensure_success(request.send().await?).await?;

        let status = response.status();
        let headers = response.headers().clone();

        let data = if status == StatusCode::CREATED || status == StatusCode::NO_CONTENT {
            match headers.get(LOCATION).and_then(|v| v.to_str().ok()) {
                Some(location) => Some(serde_json::from_value(serde_json::json!({
                    "location": location
                }))?),
                None => None,
            }
        } else {
            decode_optional(response).await?
        };

        Ok(FizzyResponse {
            data,
            status: status.as_u16(),
            headers,
        })
    }

    /// PUT `path` with `body`; 204 yields `None`
    #[instrument(level = "debug", skip(self, body))]
    pub async fn put<B, T>(&self, path: &str, body: &B) -> FizzyResult<FizzyResponse<Option<T>>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        let response = self
            .http
            .put(self.account_url(path))
            .bearer_auth(&self.config.access_token)
            .body(payload)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let data = if status == StatusCode::NO_CONTENT {
            None
        } else {
            decode_optional(response).await?
        };

        Ok(FizzyResponse {
            data,
            status: status.as_u16(),
            headers,
        })
    }

    /// DELETE `path`; the body, if any, is ignored
    #[instrument(level = "debug", skip(self))]
    pub async fn delete(&self, path: &str) -> FizzyResult<FizzyResponse<()>> {
        let response = self
            .http
            .delete(self.account_url(path))
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        Ok(FizzyResponse {
            data: (),
            status: response.status().as_u16(),
            headers: response.headers().clone(),
        })
    }
}

/// Turn a non-2xx response into [`FizzyError::Api`] with the raw body text
async fn ensure_success(response: Response) -> FizzyResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), "Fizzy API returned an error");
    Err(FizzyError::Api {
        status: status.as_u16(),
        body,
    })
}

/// Decode a JSON body, treating a zero-length body as no data
async fn decode_optional<T: DeserializeOwned>(response: Response) -> FizzyResult<Option<T>> {
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(&bytes)?))
}
