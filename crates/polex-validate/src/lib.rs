//! Polex Schema Validation
//!
//! Validates extracted documents against the externally supplied policy
//! schema and, independently, computes the list of required-but-absent
//! field paths.
//!
//! The second check exists because the parser's default-completion pass
//! masks true absence at the schema level: a document can be structurally
//! complete (every required field present, possibly as a sentinel) while
//! extraction actually found nothing. Validation never crashes the
//! pipeline; internal failures are converted to reported errors.
//!
//! # Examples
//!
//! ```no_run
//! use polex_validate::SchemaValidator;
//! use polex_domain::Document;
//!
//! let validator = SchemaValidator::from_file("schema/policy.schema.json".as_ref()).unwrap();
//! let report = validator.validate(&Document::new());
//! assert!(!report.is_valid);
//! ```

#![warn(missing_docs)]

mod error;
mod validator;

pub use error::ValidateError;
pub use validator::SchemaValidator;
