//! LLM gateway for node categorization and explanations.
//!
//! The gateway is an opaque request/response boundary: the pipeline sends
//! a prompt, receives text, and treats any transport or status failure as
//! `ModelUnavailable` without retrying.
//!
//! # Supported Providers
//!
//! - **Ollama** - Local models, no API key needed (requires Ollama installed)
//! - **Mock** - Scripted responses for tests and offline use

mod mock;
mod ollama;
mod provider;

pub mod prompts;

pub use mock::MockProvider;
pub use ollama::OllamaProvider;
pub use provider::{LlmConfig, LlmProvider};
