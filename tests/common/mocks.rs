use async_trait::async_trait;
use axum::body::Bytes;
use ocr_relay::{
    Error, Result,
    upstream::{ContentPart, MultimodalClient},
};
use std::sync::Mutex;

/// What the mock answers every call with.
#[derive(Debug, Clone)]
pub enum MockReply {
    Body(String),
    Upstream { status: u16, body: String },
    Internal(String),
}

/// Mock upstream client that records every content list it is sent.
#[derive(Debug)]
pub struct MockClient {
    pub reply: MockReply,
    pub requests: Mutex<Vec<Vec<ContentPart>>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::with_reply(MockReply::Body(r#"{"output":{"choices":[]}}"#.to_string()))
    }

    pub fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn get_requests(&self) -> Vec<Vec<ContentPart>> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MultimodalClient for MockClient {
    async fn generate(&self, content: Vec<ContentPart>) -> Result<Bytes> {
        self.requests.lock().unwrap().push(content);

        match &self.reply {
            MockReply::Body(body) => Ok(Bytes::from(body.clone())),
            MockReply::Upstream { status, body } => Err(Error::upstream(*status, body.clone())),
            MockReply::Internal(msg) => Err(Error::internal(msg.clone())),
        }
    }
}
