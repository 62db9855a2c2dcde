#![allow(dead_code)]

pub mod mocks;

use axum::{Router, body::Body, http::Request, response::Response};
use ocr_relay::server::{self, handlers::AppState};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_PROMPT: &str = "Extract all text from the image.";

pub fn create_test_app(client: Arc<mocks::MockClient>) -> Router {
    let state = AppState::new(client, TEST_PROMPT);
    server::router(state, 1024 * 1024)
}

pub fn json_post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn assert_cors_headers(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}
