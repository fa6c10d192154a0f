//! Pipeline orchestration: text to structurally complete document

use crate::config::PipelineConfig;
use crate::error::ExtractorError;
use crate::parser::ResponseParser;
use crate::prompt::PromptBuilder;
use crate::types::{ExtractionOutcome, ExtractionRequest};
use polex_domain::traits::GenerativeModel;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::time::timeout;
use tracing::{debug, info};

/// Drives a single extraction: prompt assembly, the generation call, and
/// response parsing.
///
/// The model is a capability dependency injected at construction; the
/// call is synchronous, single-shot, and bridged onto the blocking pool.
pub struct PolicyExtractor<M>
where
    M: GenerativeModel,
{
    model: Arc<M>,
    parser: ResponseParser,
    config: PipelineConfig,
    model_name: String,
}

impl<M> PolicyExtractor<M>
where
    M: GenerativeModel + Send + Sync + 'static,
    M::Error: std::fmt::Display,
{
    /// Create a new extractor
    pub fn new(model: M, parser: ResponseParser, config: PipelineConfig) -> Self {
        Self {
            model: Arc::new(model),
            parser,
            config,
            model_name: "model".to_string(),
        }
    }

    /// Create an extractor with a specific model name recorded in outcomes
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Extract a structured record from acquired document text.
    ///
    /// Fails when the text is below the minimum meaningful length, when
    /// the generation call fails or times out, or when the model returns
    /// an empty response. A non-empty response always yields a document:
    /// malformed lines inside it are recovered by skipping.
    pub async fn extract(
        &self,
        request: ExtractionRequest,
    ) -> Result<ExtractionOutcome, ExtractorError> {
        let start_time = SystemTime::now();

        let text_len = request.text.trim().chars().count();
        if text_len < self.config.min_text_length {
            return Err(ExtractorError::TextTooShort(
                text_len,
                self.config.min_text_length,
            ));
        }

        info!(
            "Starting extraction for source '{}', text length {}",
            request.source_id, text_len
        );

        let prompt = PromptBuilder::new(request.text)
            .with_max_chars(self.config.max_prompt_chars)
            .build();

        debug!("Prompt length: {} chars", prompt.len());

        let response = timeout(self.config.generation_timeout(), self.call_model(&prompt))
            .await
            .map_err(|_| ExtractorError::Timeout)??;

        debug!("Model response length: {} chars", response.len());

        if response.trim().is_empty() {
            return Err(ExtractorError::EmptyResponse);
        }

        let document = self.parser.parse(&response);

        let processing_time_ms = start_time
            .elapsed()
            .unwrap_or(Duration::from_secs(0))
            .as_millis() as u64;

        info!(
            "Extraction complete for source '{}' in {} ms",
            request.source_id, processing_time_ms
        );

        Ok(ExtractionOutcome {
            document,
            source_id: request.source_id,
            model_name: self.model_name.clone(),
            processing_time_ms,
        })
    }

    /// Call the generative model on the blocking pool
    async fn call_model(&self, prompt: &str) -> Result<String, ExtractorError> {
        let model = Arc::clone(&self.model);
        let prompt = prompt.to_string();

        tokio::task::spawn_blocking(move || {
            model
                .generate(&prompt)
                .map_err(|e| ExtractorError::Model(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Model(format!("Task join error: {}", e)))?
    }
}
