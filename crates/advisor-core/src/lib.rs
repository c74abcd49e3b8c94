//! # advisor-core
//!
//! Provider-agnostic LLM abstraction shared across the investment advisor.
//!
//! The `LlmProvider` trait enables swapping between OpenAI, Anthropic, or any
//! other chat-completion backend without changing advisor logic. One call in,
//! one text blob out; no streaming, no tool calling.

pub mod error;
pub mod message;
pub mod provider;

pub use error::{AdvisorError, Result};
pub use message::{Message, Role};
pub use provider::{Completion, GenerationOptions, LlmProvider};
