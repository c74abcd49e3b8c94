//! Application State

use std::sync::Arc;

use advisor_core::LlmProvider;
use portfolio_advisor::Explainer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// LLM provider (OpenAI, etc.), used directly for health reporting
    pub provider: Arc<dyn LlmProvider>,

    /// Explanation requester wired to the provider
    pub explainer: Arc<Explainer>,
}
