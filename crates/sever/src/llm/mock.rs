//! Mock LLM provider for testing.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{Result, SeverError};

use super::provider::{LlmConfig, LlmProvider};

/// Mock LLM provider that replays scripted responses in order.
pub struct MockProvider {
    config: LlmConfig,
    responses: Mutex<VecDeque<String>>,
}

impl MockProvider {
    /// Create a mock provider with no scripted responses.
    pub fn new() -> Self {
        Self {
            config: LlmConfig::default(),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    /// Create a mock provider that replays `responses` in order.
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config: LlmConfig::default(),
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
        }
    }

    /// Queue another response.
    pub fn push_response(&self, response: impl Into<String>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response.into());
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for MockProvider {
    fn generate(&self, _prompt: &str) -> Result<String> {
        let mut queue = self
            .responses
            .lock()
            .map_err(|_| SeverError::ModelUnavailable("mock provider lock poisoned".to_string()))?;
        queue.pop_front().ok_or_else(|| {
            SeverError::ModelUnavailable("mock provider has no scripted response".to_string())
        })
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_responses_in_order() {
        let provider = MockProvider::with_responses(["first", "second"]);
        assert_eq!(provider.generate("a").unwrap(), "first");
        assert_eq!(provider.generate("b").unwrap(), "second");
    }

    #[test]
    fn test_exhausted_queue_is_unavailable() {
        let provider = MockProvider::new();
        assert!(matches!(
            provider.generate("x"),
            Err(SeverError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn test_push_response_appends() {
        let provider = MockProvider::new();
        provider.push_response("late");
        assert_eq!(provider.generate("x").unwrap(), "late");
    }
}
