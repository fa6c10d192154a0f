//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The generative model call failed
    #[error("Model error: {0}")]
    Model(String),

    /// The model returned an empty response; no document can be produced
    #[error("Model returned an empty response")]
    EmptyResponse,

    /// The generation call exceeded the configured timeout
    #[error("Generation timeout")]
    Timeout,

    /// The acquired text is below the minimum meaningful length
    #[error("Text too short: {0} chars (minimum: {1})")]
    TextTooShort(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
