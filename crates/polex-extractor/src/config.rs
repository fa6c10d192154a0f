//! Configuration for the extraction pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Minimum stripped length of acquired text before extraction is
    /// attempted (characters); shorter inputs are a client-input error
    pub min_text_length: usize,

    /// Maximum document text included in the prompt (characters); longer
    /// text is truncated with a notice
    pub max_prompt_chars: usize,

    /// Maximum time for a single generation call (seconds)
    pub generation_timeout_secs: u64,
}

impl PipelineConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_prompt_chars == 0 {
            return Err("max_prompt_chars must be greater than 0".to_string());
        }
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        if self.min_text_length > self.max_prompt_chars {
            return Err("min_text_length cannot exceed max_prompt_chars".to_string());
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            min_text_length: 50,
            max_prompt_chars: 20_000,
            generation_timeout_secs: 120,
        }
    }
}

impl PipelineConfig {
    /// Aggressive preset: shorter timeout, smaller prompt for faster
    /// turnaround
    pub fn aggressive() -> Self {
        Self {
            min_text_length: 50,
            max_prompt_chars: 10_000,
            generation_timeout_secs: 60,
        }
    }

    /// Lenient preset: longer timeout, larger prompt for better coverage
    pub fn lenient() -> Self {
        Self {
            min_text_length: 50,
            max_prompt_chars: 40_000,
            generation_timeout_secs: 300,
        }
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
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_text_length, 50);
        assert_eq!(config.max_prompt_chars, 20_000);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(PipelineConfig::aggressive().validate().is_ok());
        assert!(PipelineConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_invalid_prompt_budget() {
        let mut config = PipelineConfig::default();
        config.max_prompt_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_length_cannot_exceed_budget() {
        let mut config = PipelineConfig::default();
        config.min_text_length = config.max_prompt_chars + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = PipelineConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.min_text_length, parsed.min_text_length);
        assert_eq!(config.max_prompt_chars, parsed.max_prompt_chars);
        assert_eq!(config.generation_timeout_secs, parsed.generation_timeout_secs);
    }
}
