//! OpenAI-compatible provider implementation
//!
//! Talks to a chat-completions endpoint. The call contract is single-shot:
//! the request is issued once and any failure surfaces immediately to the
//! caller; retry policy belongs to whoever owns the transport.

use crate::ModelError;
use polex_domain::traits::GenerativeModel as GenerativeModelTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default model for extraction
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Low temperature for consistent extraction output
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// Default request timeout (120 seconds; extractions read long documents)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable consulted for the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Chat-completions provider for OpenAI-compatible APIs
pub struct OpenAiModel {
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatCompletionMessage,
}

#[derive(Deserialize)]
struct ChatCompletionMessage {
    content: String,
}

impl OpenAiModel {
    /// Create a provider against a specific endpoint
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g. "https://api.openai.com/v1")
    /// - `api_key`: bearer token for the API
    /// - `model`: model to use (e.g. "gpt-4o")
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            client,
        }
    }

    /// Create a provider using the `OPENAI_API_KEY` environment variable
    /// and the default endpoint
    pub fn from_env(model: impl Into<String>) -> Result<Self, ModelError> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| ModelError::MissingApiKey(API_KEY_ENV))?;
        Ok(Self::new(DEFAULT_ENDPOINT, api_key, model))
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Generate a completion for the prompt
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is unreachable, the model is not
    /// available, the response cannot be parsed, or the completion is empty.
    pub async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ModelError::Communication(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ModelError::ModelNotAvailable(self.model.clone()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ModelError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ModelError::InvalidResponse("No choices in response".to_string()))?;

        if content.trim().is_empty() {
            return Err(ModelError::EmptyResponse);
        }

        Ok(content)
    }
}

impl GenerativeModelTrait for OpenAiModel {
    type Error = ModelError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.generate(prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let model = OpenAiModel::new("https://api.openai.com/v1", "sk-test", "gpt-4o");
        assert_eq!(model.endpoint, "https://api.openai.com/v1");
        assert_eq!(model.model, "gpt-4o");
        assert_eq!(model.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_with_temperature() {
        let model =
            OpenAiModel::new(DEFAULT_ENDPOINT, "sk-test", DEFAULT_MODEL).with_temperature(0.7);
        assert_eq!(model.temperature, 0.7);
    }

    #[tokio::test]
    async fn test_error_on_unreachable_endpoint() {
        let model = OpenAiModel::new("http://localhost:1", "sk-test", "gpt-4o");

        let result = model.generate("test").await;
        assert!(matches!(result, Err(ModelError::Communication(_))));
    }

    // Integration test (requires a live API key)
    #[tokio::test]
    #[ignore] // Only run when an API key is available
    async fn test_generate_integration() {
        let model = OpenAiModel::from_env(DEFAULT_MODEL).unwrap();
        let result = model.generate("Say 'hello' and nothing else").await;

        if let Ok(response) = result {
            assert!(!response.is_empty());
        }
    }
}
