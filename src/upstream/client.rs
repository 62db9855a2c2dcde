use super::types::*;
use crate::{Error, Result, config::UpstreamConfig};
use async_trait::async_trait;
use axum::body::Bytes;
use serde::de::IgnoredAny;
use std::time::Duration;
use tracing::{debug, error};

/// A multimodal generation backend the relay can forward to.
#[async_trait]
pub trait MultimodalClient: Send + Sync {
    /// Sends one user message and returns the raw JSON body of a successful
    /// reply, untouched.
    async fn generate(&self, content: Vec<ContentPart>) -> Result<Bytes>;
}

pub struct DashScopeClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    timeout_secs: u64,
}

impl DashScopeClient {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
            api_key: config.api_key,
            model: config.model,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            Error::Network(e)
        }
    }
}

#[async_trait]
impl MultimodalClient for DashScopeClient {
    async fn generate(&self, content: Vec<ContentPart>) -> Result<Bytes> {
        debug!(
            "Sending generation request with {} content parts to {}",
            content.len(),
            self.endpoint
        );

        let request = GenerationRequest::user(&self.model, content);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("X-DashScope-SSE", "disable")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(|e| self.transport_error(e))?;
            error!("Upstream API error {}: {}", status.as_u16(), body);
            return Err(Error::upstream(status.as_u16(), body));
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        // Only checked, never re-encoded, so the caller sees the upstream bytes
        serde_json::from_slice::<IgnoredAny>(&body)?;

        debug!("Received {} byte upstream response", body.len());
        Ok(body)
    }
}
