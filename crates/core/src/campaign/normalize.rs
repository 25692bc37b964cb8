use serde::{Deserialize, Serialize};

use super::types::{CampaignCopy, GenerationResult};

/// Stock image returned when no image could be generated.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=600&h=600&fit=crop";

/// `{"success": true, "data": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessEnvelope {
    pub success: bool,
    pub data: GenerationResult,
}

impl SuccessEnvelope {
    pub fn new(data: GenerationResult) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Pick the generated image, or the stock image when there is none.
pub fn resolve_image_url(generated: Option<String>) -> String {
    generated
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string())
}

/// Combine the copy and the (optional) generated image into the final result.
pub fn assemble(copy: CampaignCopy, generated_image: Option<String>) -> GenerationResult {
    GenerationResult {
        enhanced_prompt: copy.enhanced_prompt,
        caption: copy.caption,
        hashtags: copy.hashtags,
        image_url: resolve_image_url(generated_image),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copy() -> CampaignCopy {
        CampaignCopy {
            enhanced_prompt: "Neon city at night".to_string(),
            caption: "Light it up.".to_string(),
            hashtags: vec!["#Neon".to_string(), "#City".to_string()],
        }
    }

    #[test]
    fn test_generated_image_is_kept() {
        let result = assemble(copy(), Some("data:image/png;base64,AAAA".to_string()));
        assert_eq!(result.image_url, "data:image/png;base64,AAAA");
        assert_eq!(result.caption, "Light it up.");
        assert_eq!(result.hashtags, vec!["#Neon", "#City"]);
    }

    #[test]
    fn test_missing_image_uses_stock_url() {
        let result = assemble(copy(), None);
        assert_eq!(result.image_url, FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_blank_image_uses_stock_url() {
        assert_eq!(resolve_image_url(Some("  ".to_string())), FALLBACK_IMAGE_URL);
        assert_eq!(resolve_image_url(Some(String::new())), FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_success_envelope_shape() {
        let envelope = SuccessEnvelope::new(assemble(copy(), None));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["enhancedPrompt"], "Neon city at night");
        assert_eq!(value["data"]["caption"], "Light it up.");
        assert_eq!(value["data"]["hashtags"][1], "#City");
        assert_eq!(value["data"]["imageUrl"], FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_error_body_shape() {
        let value = serde_json::to_value(ErrorBody::new("boom")).unwrap();
        assert_eq!(value, serde_json::json!({ "error": "boom" }));
    }
}
