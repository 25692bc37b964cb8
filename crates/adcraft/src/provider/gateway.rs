use adcraft_core::campaign::wire::{completion_text, first_image_url};
use adcraft_core::campaign::{ApiKey, ChatCompletionRequest, ChatCompletionResponse, UpstreamError};

use super::{CopyWriter, ImageGenerator};
use crate::config::ProviderConfig;

/// OpenAI-compatible chat-completions client used for both copy and images.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    url: String,
    text_model: String,
    image_model: String,
}

impl GatewayClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.completions_url(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        }
    }

    async fn complete(
        &self,
        key: &ApiKey,
        body: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, UpstreamError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(key.expose())
            .json(body)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CopyWriter for GatewayClient {
    async fn write_copy(
        &self,
        key: &ApiKey,
        system: String,
        user: String,
    ) -> Result<String, UpstreamError> {
        let request = ChatCompletionRequest::copy(&self.text_model, system, user);
        let response = self.complete(key, &request).await?;
        Ok(completion_text(&response))
    }
}

#[async_trait::async_trait]
impl ImageGenerator for GatewayClient {
    async fn generate_image(
        &self,
        key: &ApiKey,
        prompt: String,
    ) -> Result<Option<String>, UpstreamError> {
        let request = ChatCompletionRequest::image(&self.image_model, prompt);
        let response = self.complete(key, &request).await?;
        Ok(first_image_url(&response))
    }
}
