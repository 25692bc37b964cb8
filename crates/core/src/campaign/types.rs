use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Social platform the ad is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Linkedin,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::Linkedin),
            other => Err(format!(
                "Unsupported platform: {other} (expected instagram or linkedin)"
            )),
        }
    }
}

/// Voice the copywriter model is asked to write in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandTone {
    Professional,
    Witty,
    Urgent,
    Inspirational,
}

impl BrandTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrandTone::Professional => "professional",
            BrandTone::Witty => "witty",
            BrandTone::Urgent => "urgent",
            BrandTone::Inspirational => "inspirational",
        }
    }
}

impl fmt::Display for BrandTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(BrandTone::Professional),
            "witty" => Ok(BrandTone::Witty),
            "urgent" => Ok(BrandTone::Urgent),
            "inspirational" => Ok(BrandTone::Inspirational),
            other => Err(format!(
                "Unsupported brand tone: {other} (expected professional, witty, urgent or inspirational)"
            )),
        }
    }
}

/// Inbound request to generate one ad campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Free-form description of the ad creative.
    pub prompt: String,
    pub platform: Platform,
    pub brand_tone: BrandTone,
    /// Call-to-action text, e.g. "Shop now".
    pub cta_text: String,
}

impl GenerationRequest {
    /// Reject requests the upstream model cannot do anything useful with.
    pub fn validate(&self) -> Result<(), super::GenerationError> {
        if self.prompt.trim().is_empty() {
            return Err(super::GenerationError::InvalidRequest(
                "prompt must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Ad copy written by the text model (or the fallback copy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignCopy {
    /// Visual description handed to the image model.
    pub enhanced_prompt: String,
    pub caption: String,
    pub hashtags: Vec<String>,
}

/// Final payload returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub enhanced_prompt: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    /// Generated image reference (URL or data URI), or the stock fallback.
    pub image_url: String,
}

/// Credential for the AI gateway.
///
/// Only constructed once the presence of a key has been verified, so
/// collaborators holding one never need to re-check it.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for missing or blank keys.
    pub fn new(key: Option<&str>) -> Option<Self> {
        key.map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| ApiKey(k.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_from_camel_case() {
        let json = r#"{
            "prompt": "Summer sale",
            "platform": "linkedin",
            "brandTone": "inspirational",
            "ctaText": "Learn more"
        }"#;

        let request: GenerationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.prompt, "Summer sale");
        assert_eq!(request.platform, Platform::Linkedin);
        assert_eq!(request.brand_tone, BrandTone::Inspirational);
        assert_eq!(request.cta_text, "Learn more");
    }

    #[test]
    fn test_request_rejects_unknown_platform() {
        let json = r#"{"prompt":"x","platform":"tiktok","brandTone":"witty","ctaText":"Go"}"#;
        assert!(serde_json::from_str::<GenerationRequest>(json).is_err());
    }

    #[test]
    fn test_validate_rejects_blank_prompt() {
        let request = GenerationRequest {
            prompt: "   \n".to_string(),
            platform: Platform::Instagram,
            brand_tone: BrandTone::Professional,
            cta_text: "Buy".to_string(),
        };
        assert!(matches!(
            request.validate(),
            Err(crate::campaign::GenerationError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_platform_and_tone_from_str_are_case_insensitive() {
        assert_eq!("Instagram".parse::<Platform>(), Ok(Platform::Instagram));
        assert_eq!(" URGENT ".parse::<BrandTone>(), Ok(BrandTone::Urgent));
        assert!("myspace".parse::<Platform>().is_err());
        assert!("sarcastic".parse::<BrandTone>().is_err());
    }

    #[test]
    fn test_result_serializes_to_camel_case() {
        let result = GenerationResult {
            enhanced_prompt: "A beach".to_string(),
            caption: "Sun!".to_string(),
            hashtags: vec!["#Sun".to_string()],
            image_url: "https://example.com/a.png".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["enhancedPrompt"], "A beach");
        assert_eq!(value["imageUrl"], "https://example.com/a.png");
    }

    #[test]
    fn test_api_key_blank_is_missing() {
        assert!(ApiKey::new(None).is_none());
        assert!(ApiKey::new(Some("")).is_none());
        assert!(ApiKey::new(Some("  ")).is_none());
        assert_eq!(ApiKey::new(Some("sk-1")).unwrap().expose(), "sk-1");
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new(Some("secret")).unwrap();
        assert!(!format!("{key:?}").contains("secret"));
    }
}
