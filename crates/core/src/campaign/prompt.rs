use super::types::{GenerationRequest, Platform};

/// Default model used to write the ad copy.
pub const DEFAULT_TEXT_MODEL: &str = "google/gemini-2.5-flash";

/// Default model used to render the ad image.
pub const DEFAULT_IMAGE_MODEL: &str = "google/gemini-2.5-flash-image";

/// Build the copywriter system instruction for a request.
///
/// Embeds the brand tone, platform and CTA, and pins the JSON shape the
/// copy parser expects back.
pub fn build_system_instruction(request: &GenerationRequest) -> String {
    format!(
        "You are an expert marketing copywriter. Generate compelling ad copy for social media campaigns.

Your response must be valid JSON with this exact structure:
{{
  \"enhancedPrompt\": \"A detailed, visual description for image generation\",
  \"caption\": \"The marketing caption (2-3 sentences max)\",
  \"hashtags\": [\"#Hashtag1\", \"#Hashtag2\", \"#Hashtag3\", \"#Hashtag4\", \"#Hashtag5\"]
}}

Brand tone: {}
Platform: {}
CTA: {}

Make the caption engaging and conversion-focused. The enhanced prompt should be highly visual and suitable for AI image generation.",
        request.brand_tone, request.platform, request.cta_text
    )
}

/// Build the user turn that carries the campaign prompt.
pub fn build_user_message(prompt: &str) -> String {
    format!("Create marketing content for this campaign: \"{prompt}\"")
}

/// Build the image-model prompt from the enhanced prompt.
pub fn build_image_prompt(enhanced_prompt: &str, platform: Platform) -> String {
    format!(
        "Create a professional marketing advertisement image: {enhanced_prompt}. \
         Style: Clean, modern, professional marketing material suitable for {platform}. \
         High quality, visually appealing."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::types::BrandTone;

    fn request() -> GenerationRequest {
        GenerationRequest {
            prompt: "Summer sale on sandals".to_string(),
            platform: Platform::Linkedin,
            brand_tone: BrandTone::Urgent,
            cta_text: "Shop now".to_string(),
        }
    }

    #[test]
    fn test_system_instruction_embeds_tone_platform_and_cta() {
        let instruction = build_system_instruction(&request());
        assert!(instruction.contains("Brand tone: urgent\n"));
        assert!(instruction.contains("Platform: linkedin\n"));
        assert!(instruction.contains("CTA: Shop now\n"));
    }

    #[test]
    fn test_system_instruction_pins_json_shape() {
        let instruction = build_system_instruction(&request());
        assert!(instruction.contains("\"enhancedPrompt\":"));
        assert!(instruction.contains("\"caption\":"));
        assert!(instruction.contains(
            "\"hashtags\": [\"#Hashtag1\", \"#Hashtag2\", \"#Hashtag3\", \"#Hashtag4\", \"#Hashtag5\"]"
        ));
        assert!(!instruction.contains("{{"));
    }

    #[test]
    fn test_system_instruction_full_text() {
        let expected = r##"You are an expert marketing copywriter. Generate compelling ad copy for social media campaigns.

Your response must be valid JSON with this exact structure:
{
  "enhancedPrompt": "A detailed, visual description for image generation",
  "caption": "The marketing caption (2-3 sentences max)",
  "hashtags": ["#Hashtag1", "#Hashtag2", "#Hashtag3", "#Hashtag4", "#Hashtag5"]
}

Brand tone: urgent
Platform: linkedin
CTA: Shop now

Make the caption engaging and conversion-focused. The enhanced prompt should be highly visual and suitable for AI image generation."##;
        assert_eq!(build_system_instruction(&request()), expected);
    }

    #[test]
    fn test_user_message_quotes_prompt() {
        assert_eq!(
            build_user_message("Summer sale"),
            "Create marketing content for this campaign: \"Summer sale\""
        );
    }

    #[test]
    fn test_image_prompt_mentions_platform_and_style() {
        let prompt = build_image_prompt("A sunny beach with sandals", Platform::Instagram);
        assert_eq!(
            prompt,
            "Create a professional marketing advertisement image: A sunny beach with sandals. \
             Style: Clean, modern, professional marketing material suitable for instagram. \
             High quality, visually appealing."
        );
    }
}
