//! Transport-level tests for `FizzyClient` against a local mock backend

mod common;

use axum::http::{Method, StatusCode};
use common::{Canned, MockBackend, TOKEN};
use fizzy_mcp::types::{Board, Created, Identity};
use fizzy_mcp::FizzyError;
use serde_json::{json, Value};

#[tokio::test]
async fn test_get_sends_auth_and_json_headers() {
    let backend = MockBackend::start(Canned::json(
        StatusCode::OK,
        json!([{ "id": "b1", "name": "Roadmap", "all_access": true }]),
    ))
    .await;

    let response = backend.client().get::<Vec<Board>>("/boards").await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].name, "Roadmap");

    let request = backend.only_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, MockBackend::account_path("/boards"));
    assert_eq!(
        request.header("authorization"),
        Some(format!("Bearer {}", TOKEN).as_str())
    );
    assert_eq!(request.header("accept"), Some("application/json"));
    assert_eq!(request.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn test_identity_resolves_against_bare_base() {
    let backend = MockBackend::start(Canned::json(
        StatusCode::OK,
        json!({ "accounts": [{ "id": "a1", "name": "37signals", "slug": "/897362094" }] }),
    ))
    .await;

    let identity: Identity = backend.client().get("/my/identity").await.unwrap().data;
    assert_eq!(identity.accounts.len(), 1);
    assert_eq!(backend.only_request().path, "/my/identity");
}

#[tokio::test]
async fn test_trailing_slash_on_base_url() {
    let backend = MockBackend::start(Canned::json(StatusCode::OK, json!([]))).await;
    let config = fizzy_mcp::Config::new(format!("{}/", backend.base_url), "1", TOKEN);
    let client = fizzy_mcp::FizzyClient::new(config).unwrap();

    client.get::<Vec<Board>>("/tags").await.unwrap();
    assert_eq!(backend.only_request().path, "/1/tags");
}

#[tokio::test]
async fn test_post_created_with_location_skips_body() {
    let backend = MockBackend::start(
        Canned::text(StatusCode::CREATED, "this is not json")
            .with_header("location", "/897362094/boards/03f5v9zkft4hj9qq0lsn9ohcm"),
    )
    .await;

    let body = json!({ "board": { "name": "Roadmap" } });
    let response = backend
        .client()
        .post::<_, Created>("/boards", &body)
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(
        response.data,
        Some(Created {
            location: "/897362094/boards/03f5v9zkft4hj9qq0lsn9ohcm".to_string()
        })
    );

    let request = backend.only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.json(), body);
}

#[tokio::test]
async fn test_post_no_content_with_location() {
    let backend = MockBackend::start(
        Canned::text(StatusCode::NO_CONTENT, "")
            .with_header("location", "/897362094/cards/12/comments/03f8hv"),
    )
    .await;

    let response = backend
        .client()
        .post::<_, Created>("/cards/12/comments", &json!({ "comment": { "body": "Hi" } }))
        .await
        .unwrap();

    assert_eq!(response.status, 204);
    assert_eq!(
        response.data,
        Some(Created {
            location: "/897362094/cards/12/comments/03f8hv".to_string()
        })
    );
}

#[tokio::test]
async fn test_post_created_without_location_is_none() {
    let backend = MockBackend::start(Canned::empty(StatusCode::CREATED)).await;
    let response = backend
        .client()
        .post::<_, Created>("/boards", &json!({ "board": { "name": "x" } }))
        .await
        .unwrap();
    assert_eq!(response.data, None);
}

#[tokio::test]
async fn test_post_no_content_is_none() {
    let backend = MockBackend::start(Canned::empty(StatusCode::NO_CONTENT)).await;
    let response = backend
        .client()
        .post_empty::<Value>("/cards/4/closure")
        .await
        .unwrap();
    assert_eq!(response.status, 204);
    assert!(response.data.is_none());

    let request = backend.only_request();
    assert_eq!(request.path, MockBackend::account_path("/cards/4/closure"));
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_post_ok_decodes_body() {
    let backend =
        MockBackend::start(Canned::json(StatusCode::OK, json!({ "id": "s1", "completed": true })))
            .await;
    let response = backend
        .client()
        .post::<_, Value>("/cards/4/steps", &json!({}))
        .await
        .unwrap();
    assert_eq!(response.data, Some(json!({ "id": "s1", "completed": true })));
}

#[tokio::test]
async fn test_put_no_content_is_none() {
    let backend = MockBackend::start(Canned::empty(StatusCode::NO_CONTENT)).await;
    let response = backend
        .client()
        .put::<_, Value>("/boards/b1", &json!({ "board": { "name": "Renamed" } }))
        .await
        .unwrap();
    assert!(response.data.is_none());

    let request = backend.only_request();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.json(), json!({ "board": { "name": "Renamed" } }));
}

#[tokio::test]
async fn test_put_ok_decodes_body() {
    let backend =
        MockBackend::start(Canned::json(StatusCode::OK, json!({ "id": "c1", "title": "New" })))
            .await;
    let response = backend
        .client()
        .put::<_, Value>("/cards/4", &json!({ "card": { "title": "New" } }))
        .await
        .unwrap();
    assert_eq!(response.data.unwrap()["title"], "New");
}

#[tokio::test]
async fn test_delete_returns_unit() {
    let backend = MockBackend::start(Canned::empty(StatusCode::NO_CONTENT)).await;
    let response = backend.client().delete("/boards/b1").await.unwrap();
    assert_eq!(response.status, 204);

    let request = backend.only_request();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.path, MockBackend::account_path("/boards/b1"));
}

fn assert_api_error(err: FizzyError, status: u16, body: &str) {
    match &err {
        FizzyError::Api { status: s, body: b } => {
            assert_eq!(*s, status);
            assert_eq!(b, body);
        }
        other => panic!("expected API error, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        format!("Fizzy API error ({}): {}", status, body)
    );
}

#[tokio::test]
async fn test_non_success_status_on_every_method() {
    let backend = MockBackend::start(Canned::text(
        StatusCode::UNPROCESSABLE_ENTITY,
        "{\"name\":[\"can't be blank\"]}",
    ))
    .await;
    let client = backend.client();
    let expected = "{\"name\":[\"can't be blank\"]}";

    let err = client.get::<Value>("/boards/b1").await.unwrap_err();
    assert_api_error(err, 422, expected);

    let err = client
        .post::<_, Value>("/boards", &json!({}))
        .await
        .unwrap_err();
    assert_api_error(err, 422, expected);

    let err = client.post_empty::<Value>("/cards/1/closure").await.unwrap_err();
    assert_api_error(err, 422, expected);

    let err = client
        .put::<_, Value>("/boards/b1", &json!({}))
        .await
        .unwrap_err();
    assert_api_error(err, 422, expected);

    let err = client.delete("/boards/b1").await.unwrap_err();
    assert_api_error(err, 422, expected);

    assert_eq!(backend.requests().len(), 5);
}

#[tokio::test]
async fn test_not_found_keeps_raw_body() {
    let backend = MockBackend::start(Canned::text(StatusCode::NOT_FOUND, "Not Found")).await;
    let err = backend.client().get::<Value>("/cards/999").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_api_error(err, 404, "Not Found");
}
