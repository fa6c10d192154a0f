//! Polex Text Acquisition
//!
//! Produces the best-available plain text for a policy document, choosing
//! between direct extraction of the PDF text layer and a rasterize-and-OCR
//! fallback for scanned documents.
//!
//! # Policy
//!
//! Direct extraction runs first, page by page, concatenating page output
//! with `--- Page N ---` markers; a failing page is skipped with a logged
//! warning. When the direct result is shorter than a fixed threshold and
//! fallback is allowed, every page is rasterized at high resolution and
//! recognized with a multi-script OCR pass (falling back to single-script
//! per page). The fallback result is preferred only when it is more than
//! 1.5x the length of the direct result, so a short but usable text layer
//! is never discarded for noisy recognition output.
//!
//! # External tools
//!
//! The OCR path shells out to `pdftoppm` (Poppler) for rasterization and
//! `tesseract` for recognition. Both paths are configurable.

#![warn(missing_docs)]

mod acquirer;
mod config;
mod error;
mod text;

pub use acquirer::TextAcquirer;
pub use config::AcquireConfig;
pub use error::AcquireError;
pub use text::clean_text;
