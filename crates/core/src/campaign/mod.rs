pub mod error;
pub mod extract;
pub mod normalize;
pub mod prompt;
pub mod types;
pub mod wire;

pub use error::{GenerationError, UpstreamError};
pub use extract::{parse_copy, CopyOutcome, FallbackReason};
pub use normalize::{assemble, resolve_image_url, ErrorBody, SuccessEnvelope, FALLBACK_IMAGE_URL};
pub use prompt::{build_image_prompt, build_system_instruction, build_user_message};
pub use types::{ApiKey, BrandTone, CampaignCopy, GenerationRequest, GenerationResult, Platform};
pub use wire::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
