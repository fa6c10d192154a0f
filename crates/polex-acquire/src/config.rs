//! Configuration for text acquisition

use serde::{Deserialize, Serialize};

/// Configuration for the text acquirer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquireConfig {
    /// Minimum stripped length of the direct extraction before the OCR
    /// fallback is considered (characters)
    pub min_direct_len: usize,

    /// Rasterization resolution for the OCR path (dots per inch)
    pub raster_dpi: u32,

    /// Primary OCR language pack: multi-script, covering Latin and Han
    pub ocr_language: String,

    /// Per-page fallback language pack when the multi-script pass fails
    pub ocr_fallback_language: String,

    /// Path to the pdftoppm binary (relies on PATH by default)
    pub pdftoppm_path: String,

    /// Path to the tesseract binary (relies on PATH by default)
    pub tesseract_path: String,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            min_direct_len: 100,
            raster_dpi: 300,
            ocr_language: "chi_sim+eng".to_string(),
            ocr_fallback_language: "eng".to_string(),
            pdftoppm_path: "pdftoppm".to_string(),
            tesseract_path: "tesseract".to_string(),
        }
    }
}

impl AcquireConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.raster_dpi == 0 {
            return Err("raster_dpi must be greater than 0".to_string());
        }
        if self.ocr_language.is_empty() {
            return Err("ocr_language must not be empty".to_string());
        }
        if self.ocr_fallback_language.is_empty() {
            return Err("ocr_fallback_language must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AcquireConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_direct_len, 100);
        assert_eq!(config.raster_dpi, 300);
    }

    #[test]
    fn test_invalid_dpi() {
        let mut config = AcquireConfig::default();
        config.raster_dpi = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_language_rejected() {
        let mut config = AcquireConfig::default();
        config.ocr_language = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AcquireConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = AcquireConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.min_direct_len, parsed.min_direct_len);
        assert_eq!(config.ocr_language, parsed.ocr_language);
        assert_eq!(config.tesseract_path, parsed.tesseract_path);
    }
}
