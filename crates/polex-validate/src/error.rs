//! Error types for schema loading

use thiserror::Error;

/// Errors that can occur while loading the schema document.
///
/// Validation itself never fails: internal problems are folded into the
/// returned report instead.
#[derive(Error, Debug)]
pub enum ValidateError {
    /// The schema file could not be read
    #[error("Schema file error: {0}")]
    Io(#[from] std::io::Error),

    /// The schema file is not valid JSON
    #[error("Schema parse error: {0}")]
    Json(#[from] serde_json::Error),
}
