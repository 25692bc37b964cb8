use super::types::{CampaignCopy, GenerationRequest};

/// Hashtags used whenever the model output cannot be parsed.
pub const FALLBACK_HASHTAGS: [&str; 5] = ["#Marketing", "#Brand", "#Success", "#Growth", "#Business"];

/// Why the model output was replaced by fallback copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No `{` ... `}` span in the text.
    NoJsonObject,
    /// A span was found but did not parse into the expected shape.
    InvalidJson(String),
}

/// Result of parsing the copywriter output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Parsed(CampaignCopy),
    Fallback {
        copy: CampaignCopy,
        reason: FallbackReason,
    },
}

impl CopyOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, CopyOutcome::Fallback { .. })
    }

    pub fn into_copy(self) -> CampaignCopy {
        match self {
            CopyOutcome::Parsed(copy) => copy,
            CopyOutcome::Fallback { copy, .. } => copy,
        }
    }
}

/// Extract the ad copy from raw model output.
///
/// The candidate object spans from the first `{` to the last `}`, so prose
/// or markdown fences around the JSON are ignored. Anything that does not
/// deserialize into [`CampaignCopy`] yields the fallback copy for `request`;
/// fields are never salvaged individually.
pub fn parse_copy(raw: &str, request: &GenerationRequest) -> CopyOutcome {
    let Some(candidate) = find_json_object(raw) else {
        return fallback(request, FallbackReason::NoJsonObject);
    };

    match serde_json::from_str::<CampaignCopy>(candidate) {
        Ok(copy) => CopyOutcome::Parsed(copy),
        Err(e) => fallback(request, FallbackReason::InvalidJson(e.to_string())),
    }
}

/// Return the slice from the first `{` to the last `}` (inclusive).
pub fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Deterministic copy built from the request alone.
pub fn fallback_copy(request: &GenerationRequest) -> CampaignCopy {
    CampaignCopy {
        enhanced_prompt: format!(
            "Professional marketing visual for: {}. High-quality, modern design with clean aesthetics.",
            request.prompt
        ),
        caption: format!(
            "Discover something amazing! {}. {} today!",
            request.prompt, request.cta_text
        ),
        hashtags: FALLBACK_HASHTAGS.iter().map(|s| s.to_string()).collect(),
    }
}

fn fallback(request: &GenerationRequest, reason: FallbackReason) -> CopyOutcome {
    CopyOutcome::Fallback {
        copy: fallback_copy(request),
        reason,
    }
}
