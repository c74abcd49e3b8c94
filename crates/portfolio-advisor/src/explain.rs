//! Explanation Requester
//!
//! One best-effort LLM call per plan, with graceful degradation: a provider
//! failure never fails the plan, it only swaps the explanation text for an
//! error message. No retry, no backoff.

use std::sync::Arc;

use advisor_core::{AdvisorError, GenerationOptions, LlmProvider, Message};

use crate::model::{AssetAllocation, InvestmentRequest};
use crate::prompt::{SYSTEM_PROMPT, build_prompt};

/// Sentinel shown when the provider answered in a shape we do not recognize
pub const NO_EXPLANATION: &str = "no explanation available";

/// Outcome of one explanation request
///
/// Degradation is encoded in the type so callers cannot forget the failure
/// path; none of the variants is an error to propagate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Explanation {
    /// Generated text, trimmed of surrounding whitespace
    Generated(String),

    /// Provider responded, but without usable text
    Unavailable,

    /// The call failed; carries the bare provider message
    Degraded(String),
}

impl Explanation {
    /// Whether the plan should surface this as a degraded result
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Explanation::Degraded(_))
    }

    /// The user-facing text for this outcome
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Explanation::Generated(text) => f.write_str(text),
            Explanation::Unavailable => f.write_str(NO_EXPLANATION),
            Explanation::Degraded(message) => {
                write!(f, "Error generating explanation: {message}")
            }
        }
    }
}

/// Requests plan explanations from an LLM provider
pub struct Explainer {
    provider: Arc<dyn LlmProvider>,
    options: GenerationOptions,
}

impl Explainer {
    pub fn new(provider: Arc<dyn LlmProvider>, options: GenerationOptions) -> Self {
        Self { provider, options }
    }

    /// Request an explanation for one plan. Infallible by design: every
    /// provider error collapses into a displayable [`Explanation`].
    pub async fn explain(
        &self,
        request: &InvestmentRequest,
        allocations: &[AssetAllocation],
    ) -> Explanation {
        let messages = [
            Message::system(SYSTEM_PROMPT),
            Message::user(build_prompt(request, allocations)),
        ];

        match self.provider.complete(&messages, &self.options).await {
            Ok(completion) => {
                let text = completion.content.trim();
                if text.is_empty() {
                    tracing::warn!("provider returned empty explanation text");
                    Explanation::Unavailable
                } else {
                    Explanation::Generated(text.to_string())
                }
            }
            Err(AdvisorError::UnexpectedResponse(detail)) => {
                tracing::warn!("unrecognized provider response: {detail}");
                Explanation::Unavailable
            }
            Err(err) => {
                tracing::warn!("explanation generation failed: {err}");
                Explanation::Degraded(err.detail())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskLevel;
    use crate::table::allocations_for;
    use advisor_core::provider::Completion;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    /// Provider that replays one scripted result
    struct ScriptedProvider {
        result: Mutex<Option<advisor_core::Result<Completion>>>,
    }

    impl ScriptedProvider {
        fn returning(result: advisor_core::Result<Completion>) -> Arc<Self> {
            Arc::new(Self {
                result: Mutex::new(Some(result)),
            })
        }

        fn text(content: &str) -> Arc<Self> {
            Self::returning(Ok(Completion {
                content: content.into(),
                model: "scripted".into(),
                usage: None,
                finish_reason: None,
            }))
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn health_check(&self) -> advisor_core::Result<bool> {
            Ok(true)
        }

        async fn complete(
            &self,
            _messages: &[Message],
            _options: &GenerationOptions,
        ) -> advisor_core::Result<Completion> {
            self.result
                .lock()
                .unwrap()
                .take()
                .expect("scripted result already consumed")
        }
    }

    fn request() -> InvestmentRequest {
        InvestmentRequest::new(dec!(10000), RiskLevel::Medium, 5).unwrap()
    }

    async fn explain_with(provider: Arc<ScriptedProvider>) -> Explanation {
        let explainer = Explainer::new(provider, GenerationOptions::default());
        let request = request();
        explainer
            .explain(&request, allocations_for(request.risk_level))
            .await
    }

    #[tokio::test]
    async fn test_success_trims_whitespace() {
        let explanation =
            explain_with(ScriptedProvider::text("  A balanced portfolio.\n\n")).await;

        assert_eq!(
            explanation,
            Explanation::Generated("A balanced portfolio.".into())
        );
        assert_eq!(explanation.text(), "A balanced portfolio.");
        assert!(!explanation.is_degraded());
    }

    #[tokio::test]
    async fn test_provider_error_degrades_to_message() {
        let explanation = explain_with(ScriptedProvider::returning(Err(
            AdvisorError::RateLimited("rate limit exceeded".into()),
        )))
        .await;

        assert!(explanation.is_degraded());
        assert_eq!(
            explanation.text(),
            "Error generating explanation: rate limit exceeded"
        );
    }

    #[tokio::test]
    async fn test_unrecognized_shape_yields_sentinel() {
        let explanation = explain_with(ScriptedProvider::returning(Err(
            AdvisorError::UnexpectedResponse("response has no choices".into()),
        )))
        .await;

        assert_eq!(explanation, Explanation::Unavailable);
        assert_eq!(explanation.text(), "no explanation available");
        assert!(!explanation.is_degraded());
    }

    #[tokio::test]
    async fn test_empty_text_yields_sentinel() {
        let explanation = explain_with(ScriptedProvider::text("   \n")).await;
        assert_eq!(explanation, Explanation::Unavailable);
    }
}
