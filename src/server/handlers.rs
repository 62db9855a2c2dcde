use super::types::OcrRequest;
use crate::{
    Error, Result,
    upstream::{MultimodalClient, build_content},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, info};

pub const MISSING_CONTENT: &str = "Missing request content: provide `image` or `text`";

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn MultimodalClient>,
    pub default_prompt: Arc<str>,
}

impl AppState {
    pub fn new(client: Arc<dyn MultimodalClient>, default_prompt: &str) -> Self {
        Self {
            client,
            default_prompt: Arc::from(default_prompt),
        }
    }
}

/// `POST /`: forwards the image and/or text to the upstream API and relays
/// its JSON reply unchanged.
///
/// The body is taken raw so that malformed JSON gets the same error shape as
/// any other rejected request.
pub async fn relay(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let request: OcrRequest = serde_json::from_slice(&body)
        .map_err(|e| Error::bad_request(format!("Invalid JSON body: {}", e)))?;

    let content = build_content(
        request.image.as_deref(),
        request.text.as_deref(),
        &state.default_prompt,
    )
    .ok_or_else(|| Error::bad_request(MISSING_CONTENT))?;

    info!(
        "Relaying OCR request (image: {}, parts: {})",
        request.image.as_deref().is_some_and(|s| !s.is_empty()),
        content.len()
    );

    let upstream_body = state.client.generate(content).await?;

    debug!("Relaying {} byte upstream response", upstream_body.len());
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        upstream_body,
    )
        .into_response())
}

/// `OPTIONS /`: the CORS layer supplies the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        axum::Json(super::ErrorResponse {
            error: "Not Found".to_string(),
            details: None,
        }),
    )
}
