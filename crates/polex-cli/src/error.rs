//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Text acquisition failure (missing or unreadable document)
    #[error("Acquisition error: {0}")]
    Acquire(#[from] polex_acquire::AcquireError),

    /// Extraction pipeline failure
    #[error("Extraction error: {0}")]
    Extract(#[from] polex_extractor::ExtractorError),

    /// Schema loading failure
    #[error("Schema error: {0}")]
    Schema(#[from] polex_validate::ValidateError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input from the caller
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No API key available for the live model
    #[error("API key not provided. Pass --api-key or set OPENAI_API_KEY.")]
    MissingApiKey,
}
