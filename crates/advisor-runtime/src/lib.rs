//! # advisor-runtime
//!
//! Runtime LLM providers for the investment advisor.
//!
//! ## Providers
//!
//! - **OpenAI** (default): chat-completions API, the backend the advisor was
//!   originally built against
//!
//! ## Usage
//!
//! ```rust,ignore
//! use advisor_runtime::OpenAiProvider;
//!
//! let provider = OpenAiProvider::from_env()?;
//! let completion = provider.complete(&messages, &options).await?;
//! ```

pub mod openai;

pub use openai::{OpenAiConfig, OpenAiProvider};

// Re-export core types for convenience
pub use advisor_core::{AdvisorError, Completion, GenerationOptions, LlmProvider, Message, Result, Role};
