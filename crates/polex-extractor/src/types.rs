//! Request and outcome types for extraction

use polex_domain::Document;

/// Request to extract a structured record from document text
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Plain text acquired from the policy document
    pub text: String,

    /// Source identifier (filename, hash, or caller-provided)
    pub source_id: String,
}

/// Result of an extraction operation
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// The structurally complete extracted document
    pub document: Document,

    /// Source identifier carried through from the request
    pub source_id: String,

    /// Name of the model that produced the raw response
    pub model_name: String,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,
}
