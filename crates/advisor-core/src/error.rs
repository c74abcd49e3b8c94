//! Error Types

use thiserror::Error;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Advisor error types
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// LLM provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unavailable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Provider responded, but not in a shape we recognize
    #[error("Unexpected provider response: {0}")]
    UnexpectedResponse(String),

    /// Rate limited
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl AdvisorError {
    /// The bare message without the variant prefix, for embedding into
    /// user-facing text.
    pub fn detail(&self) -> String {
        match self {
            AdvisorError::Provider(msg)
            | AdvisorError::ProviderUnavailable(msg)
            | AdvisorError::UnexpectedResponse(msg)
            | AdvisorError::RateLimited(msg)
            | AdvisorError::Auth(msg)
            | AdvisorError::Config(msg)
            | AdvisorError::Other(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::Other(err.to_string())
    }
}
