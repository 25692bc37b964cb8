/// Failures surfaced to the caller of a campaign generation.
///
/// The `Display` text of each variant is the message returned in the
/// `{"error": ...}` body.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("AI credits exhausted. Please add credits to continue.")]
    QuotaExhausted,

    #[error("Failed to generate marketing copy")]
    GenerationFailed,
}

impl GenerationError {
    /// Classify a failed text-completion call.
    pub fn from_upstream(err: &UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status: 429, .. } => GenerationError::RateLimited,
            UpstreamError::Status { status: 402, .. } => GenerationError::QuotaExhausted,
            _ => GenerationError::GenerationFailed,
        }
    }

    /// HTTP status code the error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            GenerationError::InvalidRequest(_) => 400,
            GenerationError::Configuration(_) => 500,
            GenerationError::RateLimited => 429,
            GenerationError::QuotaExhausted => 402,
            GenerationError::GenerationFailed => 500,
        }
    }
}

/// Failure reported by an upstream collaborator (text or image endpoint).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request to upstream failed: {0}")]
    Transport(String),

    #[error("could not decode upstream response: {0}")]
    Decode(String),
}
