use serde::{Deserialize, Serialize};

/// Body accepted on `POST /`. At least one field must be non-empty.
#[derive(Debug, Default, Deserialize)]
pub struct OcrRequest {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
