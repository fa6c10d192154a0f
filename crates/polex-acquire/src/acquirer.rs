//! Text acquirer implementation

use crate::config::AcquireConfig;
use crate::error::AcquireError;
use crate::text::stripped_len;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, error, info, warn};

/// Acquires the best-available plain text for a policy document
pub struct TextAcquirer {
    config: AcquireConfig,
}

impl TextAcquirer {
    /// Create an acquirer with the given configuration
    pub fn new(config: AcquireConfig) -> Self {
        Self { config }
    }

    /// Acquire text from the document at `path`.
    ///
    /// Runs direct extraction first; when `allow_fallback` is set and the
    /// direct result is below the configured threshold, the OCR path runs
    /// and its result is preferred only if it beats the direct result by
    /// more than 1.5x.
    ///
    /// A missing input file is fatal. Per-page failures in either path are
    /// non-fatal and merely reduce output completeness; total failure of a
    /// path yields an empty string so the decision logic runs uniformly.
    pub fn acquire(&self, path: &Path, allow_fallback: bool) -> Result<String, AcquireError> {
        if !path.exists() {
            return Err(AcquireError::DocumentNotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(AcquireError::NotAFile(path.to_path_buf()));
        }

        let direct = self.extract_direct(path);
        let direct_len = stripped_len(&direct);

        if allow_fallback && direct_len < self.config.min_direct_len {
            info!(
                "Direct extraction yielded only {} characters, trying OCR",
                direct_len
            );
            let fallback = self.extract_ocr(path);
            let fallback_len = stripped_len(&fallback);

            if prefer_fallback(direct_len, fallback_len) {
                info!(
                    "OCR extraction yielded {} characters, using OCR result",
                    fallback_len
                );
                return Ok(fallback);
            }
        }

        Ok(direct)
    }

    /// Extract the embedded text layer page by page.
    ///
    /// Returns an empty string on total failure.
    fn extract_direct(&self, path: &Path) -> String {
        let mut doc = match lopdf::Document::load(path) {
            Ok(doc) => doc,
            Err(e) => {
                error!("Error in direct text extraction: {}", e);
                return String::new();
            }
        };

        if doc.is_encrypted() {
            if let Err(e) = doc.decrypt("") {
                error!("Could not decrypt document: {}", e);
                return String::new();
            }
        }

        let pages = doc.get_pages();
        let mut page_numbers: Vec<u32> = pages.keys().copied().collect();
        page_numbers.sort_unstable();

        let mut parts = Vec::new();
        for page_number in page_numbers {
            match doc.extract_text(&[page_number]) {
                Ok(page_text) if !page_text.trim().is_empty() => {
                    parts.push(format!("--- Page {} ---\n{}\n", page_number, page_text));
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Error extracting text from page {}: {}", page_number, e);
                }
            }
        }

        parts.join("\n")
    }

    /// Rasterize every page and recognize it with OCR.
    ///
    /// Returns an empty string on total failure.
    fn extract_ocr(&self, path: &Path) -> String {
        let scratch = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(e) => {
                error!("Error in OCR extraction: {}", e);
                return String::new();
            }
        };

        let pages = match self.rasterize(path, scratch.path()) {
            Ok(pages) => pages,
            Err(e) => {
                error!("Error in OCR extraction: {}", e);
                return String::new();
            }
        };

        let mut parts = Vec::new();
        for (page_number, image_path) in pages {
            match self.recognize_page(&image_path) {
                Ok(page_text) if !page_text.trim().is_empty() => {
                    parts.push(format!("--- Page {} ---\n{}\n", page_number, page_text));
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Error performing OCR on page {}: {}", page_number, e);
                }
            }
        }

        parts.join("\n")
    }

    /// Render every page of the document as a PNG in `scratch`, returning
    /// the images in page order
    fn rasterize(&self, path: &Path, scratch: &Path) -> Result<Vec<(u32, PathBuf)>, AcquireError> {
        let prefix = scratch.join("page");

        let output = Command::new(&self.config.pdftoppm_path)
            .arg("-r")
            .arg(self.config.raster_dpi.to_string())
            .arg("-png")
            .arg(path)
            .arg(&prefix)
            .output()
            .map_err(|e| {
                AcquireError::Tool(format!(
                    "pdftoppm failed to start (is it installed? path='{}'): {}",
                    self.config.pdftoppm_path, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AcquireError::Tool(format!(
                "pdftoppm failed (exit code {}): {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        let mut pages = Vec::new();
        for entry in std::fs::read_dir(scratch)? {
            let entry_path = entry?.path();
            if let Some(page_number) = raster_page_number(&entry_path) {
                pages.push((page_number, entry_path));
            }
        }
        pages.sort_by_key(|(page_number, _)| *page_number);

        debug!("Rasterized {} pages at {} DPI", pages.len(), self.config.raster_dpi);
        Ok(pages)
    }

    /// OCR one page image: multi-script first, then the single-script
    /// fallback when that throws
    fn recognize_page(&self, image_path: &Path) -> Result<String, AcquireError> {
        match self.run_tesseract(image_path, &self.config.ocr_language) {
            Ok(text) => Ok(text),
            Err(primary_err) => {
                warn!(
                    "Multi-script recognition failed ({}), retrying with '{}'",
                    primary_err, self.config.ocr_fallback_language
                );
                self.run_tesseract(image_path, &self.config.ocr_fallback_language)
            }
        }
    }

    fn run_tesseract(&self, image_path: &Path, language: &str) -> Result<String, AcquireError> {
        let output = Command::new(&self.config.tesseract_path)
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(language)
            .output()
            .map_err(|e| {
                AcquireError::Tool(format!(
                    "tesseract failed to start (is it installed? path='{}'): {}",
                    self.config.tesseract_path, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AcquireError::Tool(format!(
                "tesseract failed (exit code {}): {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Default for TextAcquirer {
    fn default() -> Self {
        Self::new(AcquireConfig::default())
    }
}

/// The fallback-preference rule: the recognition result wins only when its
/// stripped length exceeds the direct result's by more than 1.5x
fn prefer_fallback(direct_len: usize, fallback_len: usize) -> bool {
    fallback_len * 2 > direct_len * 3
}

/// Parse the page number out of a pdftoppm output name (`page-7.png`,
/// `page-07.png`)
fn raster_page_number(path: &Path) -> Option<u32> {
    let name = path.file_name()?.to_str()?;
    let digits = name.strip_prefix("page-")?.strip_suffix(".png")?;
    digits.parse().ok()
}
