//! OpenAI LLM Provider
//!
//! Implementation of `LlmProvider` against the OpenAI chat-completions API.

use std::time::Duration;

use advisor_core::{
    error::{AdvisorError, Result},
    message::Message,
    provider::{Completion, FinishReason, GenerationOptions, LlmProvider, TokenUsage},
};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// OpenAI provider configuration
#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    /// API key (required)
    pub api_key: String,

    /// API base URL
    pub base_url: String,

    /// Default model identifier
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    /// Load configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; startup should fail before any request
    /// handling when it is absent.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                AdvisorError::Config(
                    "OPENAI_API_KEY is not set. Add it to your environment or .env file.".into(),
                )
            })?;

        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let timeout_secs = std::env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout_secs,
        })
    }

    /// Default model for this configuration
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// OpenAI chat-completions provider
pub struct OpenAiProvider {
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiProvider {
    /// Create from configuration
    pub fn from_config(config: OpenAiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AdvisorError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(OpenAiConfig::from_env()?)
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))
                .map_err(|_| AdvisorError::Auth("API key contains invalid characters".into()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Convert advisor messages to the OpenAI wire format
    fn convert_messages(messages: &[Message]) -> Vec<ChatMessage> {
        messages
            .iter()
            .map(|m| ChatMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect()
    }

    /// Map a non-2xx response to an error, surfacing the API's own message
    /// when the body parses as the standard error envelope.
    fn map_api_error(status: reqwest::StatusCode, body: &str) -> AdvisorError {
        let message = serde_json::from_str::<ApiErrorEnvelope>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| format!("HTTP {status}"));

        match status.as_u16() {
            401 | 403 => AdvisorError::Auth(message),
            429 => AdvisorError::RateLimited(message),
            500..=599 => AdvisorError::ProviderUnavailable(message),
            _ => AdvisorError::Provider(message),
        }
    }

    /// Pull the generated text out of a parsed response, rejecting shapes
    /// we do not recognize (no choices, null content).
    fn extract_completion(response: ChatCompletionResponse, model: &str) -> Result<Completion> {
        let usage = response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AdvisorError::UnexpectedResponse("response has no choices".into()))?;

        let content = choice.message.content.ok_or_else(|| {
            AdvisorError::UnexpectedResponse("choice has no message content".into())
        })?;

        let finish_reason = match choice.finish_reason.as_deref() {
            Some("stop") => Some(FinishReason::Stop),
            Some("length") => Some(FinishReason::Length),
            Some("content_filter") => Some(FinishReason::ContentFilter),
            _ => None,
        };

        Ok(Completion {
            content,
            model: model.to_string(),
            usage,
            finish_reason,
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn health_check(&self) -> Result<bool> {
        let response = self
            .http
            .get(self.endpoint("/v1/models"))
            .headers(self.auth_headers()?)
            .send()
            .await;

        match response {
            Ok(res) => Ok(res.status().is_success()),
            Err(e) => {
                tracing::warn!("OpenAI health check failed: {}", e);
                Ok(false)
            }
        }
    }

    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        let request = ChatCompletionRequest {
            model: options.model.clone(),
            messages: Self::convert_messages(messages),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            top_p: options.top_p,
        };

        let response = self
            .http
            .post(self.endpoint("/v1/chat/completions"))
            .headers(self.auth_headers()?)
            .json(&request)
            .send()
            .await
            .map_err(|e| AdvisorError::ProviderUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdvisorError::Provider(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::map_api_error(status, &body));
        }

        let parsed = serde_json::from_str::<ChatCompletionResponse>(&body)
            .map_err(|e| AdvisorError::UnexpectedResponse(e.to_string()))?;

        Self::extract_completion(parsed, &options.model)
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}
