//! Polex Model Provider Layer
//!
//! Pluggable implementations of the `GenerativeModel` trait from
//! `polex-domain`.
//!
//! # Providers
//!
//! - `MockModel`: deterministic mock for testing
//! - `OpenAiModel`: OpenAI-compatible chat-completions API integration
//!
//! # Examples
//!
//! ```
//! use polex_llm::MockModel;
//! use polex_domain::traits::GenerativeModel;
//!
//! let model = MockModel::new("policyholder.name: Jane Tan");
//! let result = model.generate("any prompt").unwrap();
//! assert_eq!(result, "policyholder.name: Jane Tan");
//! ```

#![warn(missing_docs)]

pub mod openai;

use polex_domain::traits::GenerativeModel as GenerativeModelTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiModel;

/// Errors that can occur during model operations
#[derive(Error, Debug)]
pub enum ModelError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the model API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The model returned an empty completion
    #[error("Empty response from model")]
    EmptyResponse,

    /// Model not available at the endpoint
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// No API key configured
    #[error("API key not provided; set the {0} environment variable")]
    MissingApiKey(&'static str),

    /// Generic error
    #[error("Model error: {0}")]
    Other(String),
}

/// Mock model for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use polex_llm::MockModel;
/// use polex_domain::traits::GenerativeModel;
///
/// let mut model = MockModel::default();
/// model.add_response("prompt1", "response1");
/// assert_eq!(model.generate("prompt1").unwrap(), "response1");
/// ```
#[derive(Debug, Clone)]
pub struct MockModel {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockModel {
    /// Create a mock returning a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Configure an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), "ERROR".to_string());
    }

    /// Number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl GenerativeModelTrait for MockModel {
    type Error = ModelError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            if response == "ERROR" {
                return Err(ModelError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_model_default_response() {
        let model = MockModel::new("Test response");
        assert_eq!(model.generate("any prompt").unwrap(), "Test response");
    }

    #[test]
    fn test_mock_model_specific_responses() {
        let mut model = MockModel::default();
        model.add_response("hello", "world");
        model.add_response("foo", "bar");

        assert_eq!(model.generate("hello").unwrap(), "world");
        assert_eq!(model.generate("foo").unwrap(), "bar");
        assert_eq!(model.generate("unknown").unwrap(), "Default mock response");
    }

    #[test]
    fn test_mock_model_call_count() {
        let model = MockModel::new("test");

        assert_eq!(model.call_count(), 0);
        model.generate("prompt1").unwrap();
        model.generate("prompt2").unwrap();
        assert_eq!(model.call_count(), 2);

        model.reset_call_count();
        assert_eq!(model.call_count(), 0);
    }

    #[test]
    fn test_mock_model_error_injection() {
        let mut model = MockModel::default();
        model.add_error("bad prompt");

        let result = model.generate("bad prompt");
        assert!(matches!(result, Err(ModelError::Other(_))));
    }

    #[test]
    fn test_mock_model_clone_shares_state() {
        let model1 = MockModel::new("test");
        let model2 = model1.clone();

        model1.generate("test").unwrap();

        assert_eq!(model1.call_count(), 1);
        assert_eq!(model2.call_count(), 1);
    }
}
