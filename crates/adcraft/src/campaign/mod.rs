use std::sync::Arc;

use adcraft_core::campaign::{
    assemble, build_image_prompt, build_system_instruction, build_user_message, parse_copy,
    CopyOutcome, GenerationError, GenerationRequest, GenerationResult,
};

use crate::config::ProviderConfig;
use crate::provider::{CopyWriter, GatewayClient, ImageGenerator};

/// Orchestrates one campaign generation: copy first, then the image.
///
/// Holds no per-request state, so a single instance is shared by every
/// request the server handles.
pub struct CampaignGenerator {
    config: ProviderConfig,
    writer: Arc<dyn CopyWriter>,
    images: Arc<dyn ImageGenerator>,
}

impl CampaignGenerator {
    pub fn new(
        config: ProviderConfig,
        writer: Arc<dyn CopyWriter>,
        images: Arc<dyn ImageGenerator>,
    ) -> Self {
        Self {
            config,
            writer,
            images,
        }
    }

    /// Generator backed by the real gateway for both calls.
    pub fn from_config(config: ProviderConfig) -> Self {
        let client = Arc::new(GatewayClient::new(&config));
        Self::new(config, client.clone(), client)
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let key = self.config.credential()?;
        request.validate()?;

        log::info!("Generating campaign for prompt: {}", request.prompt);
        log::info!(
            "Platform: {}, Tone: {}",
            request.platform,
            request.brand_tone
        );

        let raw = self
            .writer
            .write_copy(
                &key,
                build_system_instruction(request),
                build_user_message(&request.prompt),
            )
            .await
            .map_err(|e| {
                log::error!("Copy generation failed: {e}");
                GenerationError::from_upstream(&e)
            })?;

        log::debug!("Copy model response: {raw}");

        let outcome = parse_copy(&raw, request);
        if let CopyOutcome::Fallback { reason, .. } = &outcome {
            log::warn!("Failed to parse copy model response, using fallback: {reason:?}");
        }
        let copy = outcome.into_copy();

        let image_prompt = build_image_prompt(&copy.enhanced_prompt, request.platform);
        log::info!("Generating image with prompt: {}", copy.enhanced_prompt);

        // Image failures never fail the request; the stock image stands in.
        let image = match self.images.generate_image(&key, image_prompt).await {
            Ok(Some(url)) => {
                log::info!("Image generated successfully");
                Some(url)
            }
            Ok(None) => {
                log::warn!("Image model returned no image");
                None
            }
            Err(e) => {
                log::error!("Image generation failed: {e}");
                None
            }
        };

        Ok(assemble(copy, image))
    }
}
