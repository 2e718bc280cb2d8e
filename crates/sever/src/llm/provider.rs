//! LLM provider trait and configuration.

use crate::error::Result;

/// Configuration for LLM providers.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model to use (e.g., "codellama", "llama3.2").
    pub model: String,

    /// Maximum tokens in response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "codellama".to_string(),
            max_tokens: 1024,
            temperature: 0.3,
        }
    }
}

/// Trait for text-generation providers.
///
/// The gateway is one synchronous request/response round-trip: no
/// streaming, no retry. A transport or status failure surfaces as
/// [`crate::SeverError::ModelUnavailable`] and is propagated upward
/// unchanged. Implementations must be thread-safe (Send + Sync).
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for `prompt`.
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the configuration for this provider.
    fn config(&self) -> &LlmConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}
