use api::app;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use db::test_utils::setup_test_db;
use serde_json::Value;
use util::state::AppState;

/// Full router over a fresh, migrated in-memory database.
pub async fn make_test_app() -> (Router, AppState) {
    let app_state = AppState::new(setup_test_db().await);
    (app(app_state.clone()), app_state)
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn get_json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Asserts `response` is an enveloped JSON failure with `status` and returns the body.
pub async fn expect_json_error(response: Response, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("application/json"), "got {content_type}");

    let json = get_json_body(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
    json
}
