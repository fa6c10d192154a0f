//! Error types for text acquisition

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during text acquisition
#[derive(Error, Debug)]
pub enum AcquireError {
    /// The input document does not exist (fatal precondition failure)
    #[error("Document not found: {0}")]
    DocumentNotFound(PathBuf),

    /// The input path exists but is not a regular file
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// I/O failure while handling scratch files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An external tool failed or could not be started
    #[error("External tool error: {0}")]
    Tool(String),
}
