//! Ollama local LLM provider implementation.
//!
//! Ollama allows running LLMs locally without API keys.
//! Install from: https://ollama.ai

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, SeverError};

use super::provider::{LlmConfig, LlmProvider};

/// Default Ollama API endpoint.
const DEFAULT_API_URL: &str = "http://localhost:11434/api/generate";

/// Ollama local LLM provider.
pub struct OllamaProvider {
    client: Client,
    api_url: String,
    config: LlmConfig,
}

impl OllamaProvider {
    /// Create a new Ollama provider with default settings.
    ///
    /// Uses the codellama model by default. Make sure you've pulled it:
    /// `ollama pull codellama`
    pub fn new() -> Result<Self> {
        Self::with_config(LlmConfig::default())
    }

    /// Create with a specific model.
    ///
    /// Models that handle structured markup well:
    /// - `codellama` - Good for technical/structured output
    /// - `llama3.2` - Good balance of speed and quality
    /// - `mistral` - Fast, good for simple tasks
    pub fn with_model(model: impl Into<String>) -> Result<Self> {
        let mut config = LlmConfig::default();
        config.model = model.into();
        Self::with_config(config)
    }

    /// Create with custom configuration.
    pub fn with_config(config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120)) // Local models can be slower
            .build()
            .map_err(|e| {
                SeverError::ModelUnavailable(format!("failed to create HTTP client: {}", e))
            })?;

        let api_url = std::env::var("OLLAMA_HOST")
            .map(|host| format!("{}/api/generate", host.trim_end_matches('/')))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self {
            client,
            api_url,
            config,
        })
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

impl LlmProvider for OllamaProvider {
    fn generate(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": self.config.temperature,
                "num_predict": self.config.max_tokens
            }
        });

        let response = self
            .client
            .post(&self.api_url)
            .headers(self.build_headers())
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    SeverError::ModelUnavailable(
                        "failed to connect to Ollama. Is it running? Start with: ollama serve"
                            .to_string(),
                    )
                } else {
                    SeverError::ModelUnavailable(format!("Ollama request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();

            // Check for model not found error
            if error_text.contains("not found") {
                return Err(SeverError::ModelUnavailable(format!(
                    "model '{}' not found. Pull it with: ollama pull {}",
                    self.config.model, self.config.model
                )));
            }

            return Err(SeverError::ModelUnavailable(format!(
                "Ollama error ({}): {}",
                status, error_text
            )));
        }

        let api_response: GenerateResponse = response.json().map_err(|e| {
            SeverError::ModelUnavailable(format!("failed to parse Ollama response: {}", e))
        })?;

        Ok(api_response.response)
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

/// Ollama API response structure.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}
