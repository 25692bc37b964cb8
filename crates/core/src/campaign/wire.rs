//! Chat-completions wire format spoken by the AI gateway.
//!
//! Response types default every field so that a sparse or partial payload
//! still deserializes. Explicit `null` is read the same as a missing field,
//! at any depth; the extractors below decide what is usable.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modalities: Option<Vec<String>>,
}

impl ChatCompletionRequest {
    /// Text request: system instruction followed by the user turn.
    pub fn copy(model: &str, system: String, user: String) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            modalities: None,
        }
    }

    /// Image request: a single user turn asking for image and text output.
    pub fn image(model: &str, prompt: String) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage::user(prompt)],
            modalities: Some(vec!["image".to_string(), "text".to_string()]),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<Option<Choice>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<Option<GeneratedImage>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedImage {
    #[serde(default)]
    pub image_url: Option<ImageUrl>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageUrl {
    #[serde(default)]
    pub url: Option<String>,
}

/// Text of the first choice; empty when the model returned no content.
pub fn completion_text(response: &ChatCompletionResponse) -> String {
    response
        .choices
        .first()
        .and_then(Option::as_ref)
        .and_then(|choice| choice.message.content.clone())
        .unwrap_or_default()
}

/// URL (or data URI) of the first generated image, if any.
pub fn first_image_url(response: &ChatCompletionResponse) -> Option<String> {
    response
        .choices
        .first()?
        .as_ref()?
        .message
        .images
        .as_ref()?
        .first()?
        .as_ref()?
        .image_url
        .as_ref()?
        .url
        .clone()
        .filter(|url| !url.trim().is_empty())
}
