mod gateway;
#[cfg(test)]
pub mod testing;

pub use gateway::GatewayClient;

use adcraft_core::campaign::{ApiKey, UpstreamError};

/// Writes ad copy through a text-completion model.
#[async_trait::async_trait]
pub trait CopyWriter: Send + Sync {
    /// Returns the raw completion text.
    async fn write_copy(
        &self,
        key: &ApiKey,
        system: String,
        user: String,
    ) -> Result<String, UpstreamError>;
}

/// Renders the ad image through an image-capable model.
#[async_trait::async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Returns the first image reference, or `None` when the model answered without one.
    async fn generate_image(
        &self,
        key: &ApiKey,
        prompt: String,
    ) -> Result<Option<String>, UpstreamError>;
}
