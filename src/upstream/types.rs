use serde::{Deserialize, Serialize};

/// One entry of a user message's content list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    Image { image: String },
    Text { text: String },
}

impl ContentPart {
    pub fn image(data: impl Into<String>) -> Self {
        Self::Image { image: data.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Builds the content list for a single OCR request.
///
/// The image, if any, comes first. Caller text follows it; an image with no
/// text gets `default_prompt` instead. Empty strings count as absent, and
/// `None` is returned when there is nothing to send.
pub fn build_content(
    image: Option<&str>,
    text: Option<&str>,
    default_prompt: &str,
) -> Option<Vec<ContentPart>> {
    let image = image.filter(|s| !s.is_empty());
    let text = text.filter(|s| !s.is_empty());

    match (image, text) {
        (None, None) => None,
        (Some(image), Some(text)) => Some(vec![ContentPart::image(image), ContentPart::text(text)]),
        (Some(image), None) => Some(vec![
            ContentPart::image(image),
            ContentPart::text(default_prompt),
        ]),
        (None, Some(text)) => Some(vec![ContentPart::text(text)]),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub model: String,
    pub input: GenerationInput,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationInput {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationParameters {
    pub result_format: String,
}

impl GenerationRequest {
    /// Single-turn user request asking for a message-format result.
    pub fn user(model: impl Into<String>, content: Vec<ContentPart>) -> Self {
        Self {
            model: model.into(),
            input: GenerationInput {
                messages: vec![Message {
                    role: "user".to_string(),
                    content,
                }],
            },
            parameters: GenerationParameters {
                result_format: "message".to_string(),
            },
        }
    }
}
