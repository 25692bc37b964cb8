use adcraft_core::campaign::prompt::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use adcraft_core::campaign::{ApiKey, GenerationError};

/// Environment variable holding the gateway credential.
pub const API_KEY_ENV: &str = "AI_GATEWAY_API_KEY";

const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev/v1";

/// AI gateway flags shared by every subcommand.
#[derive(Clone, clap::Args)]
pub struct ProviderOptions {
    /// API key for the AI gateway
    #[clap(long, env = API_KEY_ENV, global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the OpenAI-compatible gateway
    #[clap(long, env = "AI_GATEWAY_URL", global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Model used to write the ad copy
    #[clap(long, env = "ADCRAFT_TEXT_MODEL", global = true, default_value = DEFAULT_TEXT_MODEL)]
    text_model: String,

    /// Model used to generate the ad image
    #[clap(long, env = "ADCRAFT_IMAGE_MODEL", global = true, default_value = DEFAULT_IMAGE_MODEL)]
    image_model: String,
}

/// Provider configuration injected into the campaign generator.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
}

/// Stands in for the credential in `Debug` output.
fn redacted(key: &Option<String>) -> Option<&'static str> {
    key.as_ref().map(|_| "***")
}

impl std::fmt::Debug for ProviderOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderOptions")
            .field("api_key", &redacted(&self.api_key))
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish()
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &redacted(&self.api_key))
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish()
    }
}

impl ProviderConfig {
    /// The credential, or a configuration error when it is missing or blank.
    pub fn credential(&self) -> Result<ApiKey, GenerationError> {
        ApiKey::new(self.api_key.as_deref())
            .ok_or_else(|| GenerationError::Configuration(format!("{API_KEY_ENV} is not configured")))
    }

    /// Full URL of the chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

impl From<ProviderOptions> for ProviderConfig {
    fn from(options: ProviderOptions) -> Self {
        Self {
            api_key: options.api_key,
            base_url: options.base_url,
            text_model: options.text_model,
            image_model: options.image_model,
        }
    }
}
