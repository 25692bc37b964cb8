use crate::prelude::{eprintln, println, *};
use adcraft_core::campaign::{BrandTone, GenerationRequest, GenerationResult, Platform};
use colored::Colorize;

use crate::campaign::CampaignGenerator;
use crate::config::ProviderConfig;

#[derive(Debug, clap::Parser)]
#[command(name = "generate")]
#[command(about = "Generate a single campaign and print it")]
pub struct App {
    /// Description of the ad creative
    pub prompt: String,

    /// Target platform (instagram, linkedin)
    #[arg(long, default_value = "instagram")]
    pub platform: Platform,

    /// Brand tone (professional, witty, urgent, inspirational)
    #[arg(long, default_value = "professional")]
    pub tone: BrandTone,

    /// Call-to-action text
    #[arg(long, default_value = "Learn more")]
    pub cta: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = ProviderConfig::from(global.provider);

    if global.verbose {
        eprintln!("Gateway: {}", config.completions_url());
        eprintln!("Text model: {}", config.text_model);
        eprintln!("Image model: {}", config.image_model);
    }

    let request = GenerationRequest {
        prompt: app.prompt,
        platform: app.platform,
        brand_tone: app.tone,
        cta_text: app.cta,
    };

    let result = CampaignGenerator::from_config(config)
        .generate(&request)
        .await
        .map_err(|e| eyre!("Campaign generation failed: {}", e))?;

    if app.json {
        println!("{}", format_result_json(&result)?);
    } else {
        println!("{}", format_result_text(&result, &request));
    }

    Ok(())
}

/// Convert a result to pretty JSON
fn format_result_json(result: &GenerationResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert a result to formatted text with colors
fn format_result_text(result: &GenerationResult, request: &GenerationRequest) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    out.push_str(&format!(
        "{}\n",
        format!(
            "{} CAMPAIGN ({} tone)",
            request.platform.as_str().to_uppercase(),
            request.brand_tone
        )
        .bright_cyan()
        .bold()
    ));
    out.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    out.push_str(&format!("\n{}\n", "Caption".green().bold()));
    out.push_str(&format!("  {}\n", result.caption.white()));

    out.push_str(&format!("\n{}\n", "Hashtags".green().bold()));
    out.push_str(&format!("  {}\n", result.hashtags.join(" ").bright_magenta()));

    out.push_str(&format!("\n{}\n", "Image prompt".green().bold()));
    out.push_str(&format!("  {}\n", result.enhanced_prompt.bright_white()));

    out.push_str(&format!("\n{}\n", "Image".green().bold()));
    out.push_str(&format!("  {}\n", preview_image_url(&result.image_url).cyan()));

    out
}

/// Inline data URIs can be megabytes long; show only their media type.
fn preview_image_url(url: &str) -> String {
    match url.strip_prefix("data:") {
        Some(rest) => {
            let media_type = rest.split([';', ',']).next().unwrap_or("unknown");
            format!("<inline {} image, {} bytes>", media_type, url.len())
        }
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(image_url: &str) -> GenerationResult {
        GenerationResult {
            enhanced_prompt: "Runner at dawn on a city bridge".to_string(),
            caption: "Every mile counts.".to_string(),
            hashtags: vec!["#Run".to_string(), "#Dawn".to_string()],
            image_url: image_url.to_string(),
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            prompt: "Running shoes".to_string(),
            platform: Platform::Linkedin,
            brand_tone: BrandTone::Inspirational,
            cta_text: "Join".to_string(),
        }
    }

    #[test]
    fn test_format_result_json_uses_camel_case() {
        let json = format_result_json(&result("https://x/y.png")).unwrap();
        assert!(json.contains("\"enhancedPrompt\": \"Runner at dawn on a city bridge\""));
        assert!(json.contains("\"imageUrl\": \"https://x/y.png\""));
    }

    #[test]
    fn test_format_result_text_contains_fields() {
        colored::control::set_override(false);
        let text = format_result_text(&result("https://x/y.png"), &request());
        assert!(text.contains("LINKEDIN CAMPAIGN (inspirational tone)"));
        assert!(text.contains("Every mile counts."));
        assert!(text.contains("#Run #Dawn"));
        assert!(text.contains("https://x/y.png"));
    }

    #[test]
    fn test_preview_image_url() {
        assert_eq!(preview_image_url("https://x/y.png"), "https://x/y.png");
        let data = "data:image/png;base64,AAAA";
        assert_eq!(
            preview_image_url(data),
            format!("<inline image/png image, {} bytes>", data.len())
        );
    }
}
