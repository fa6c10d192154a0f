//! Polex Extractor
//!
//! Converts policy-document text into a structured, nested, null-safe
//! record using a generative model.
//!
//! # Architecture
//!
//! ```text
//! Text → PromptBuilder → GenerativeModel → ResponseParser → Document
//! ```
//!
//! The model is an injected capability (`polex_domain::traits::GenerativeModel`),
//! so the parser and every test run without a network. The model's raw
//! output is a flat sequence of `dotted.path: value` lines; the parser
//! turns it into a typed nested document and then runs the
//! default-completion pass, guaranteeing that every required field is
//! structurally present even when extraction was partial.
//!
//! # Example
//!
//! ```
//! use polex_extractor::{PolicyExtractor, PipelineConfig, ExtractionRequest};
//! use polex_extractor::parser::ResponseParser;
//! use polex_llm::MockModel;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let model = MockModel::new("policyholder.name: Jane Tan");
//! let extractor = PolicyExtractor::new(
//!     model,
//!     ResponseParser::standard(),
//!     PipelineConfig::default(),
//! );
//!
//! let request = ExtractionRequest {
//!     text: "POLICY SCHEDULE ...".repeat(10),
//!     source_id: "doc_001".to_string(),
//! };
//!
//! let outcome = extractor.extract(request).await?;
//! println!("{}", outcome.document);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
pub mod parser;
pub mod prompt;
mod types;


pub use config::PipelineConfig;
pub use error::ExtractorError;
pub use extractor::PolicyExtractor;
pub use parser::ResponseParser;
pub use types::{ExtractionOutcome, ExtractionRequest};
