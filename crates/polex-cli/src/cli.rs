//! Command-line argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Extract structured data from car insurance policy PDFs
#[derive(Debug, Parser)]
#[command(name = "polex", version, about)]
pub struct Cli {
    /// Path to the policy PDF to extract
    pub document: PathBuf,

    /// Path to the validation schema document
    #[arg(long, default_value = "schema/policy.schema.json")]
    pub schema: PathBuf,

    /// Disable the OCR fallback for scanned documents
    #[arg(long)]
    pub no_ocr: bool,

    /// Model used for extraction
    #[arg(long, default_value = "gpt-4o")]
    pub model: String,

    /// Chat-completions API endpoint
    #[arg(long, default_value = polex_llm::openai::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// API key for the model endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Use a canned model response from a file instead of a live model
    #[arg(long, value_name = "FILE")]
    pub mock_response: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_invocation() {
        let cli = Cli::parse_from(["polex", "policy.pdf"]);
        assert_eq!(cli.document, PathBuf::from("policy.pdf"));
        assert_eq!(cli.model, "gpt-4o");
        assert!(!cli.no_ocr);
        assert!(cli.mock_response.is_none());
    }

    #[test]
    fn test_full_invocation() {
        let cli = Cli::parse_from([
            "polex",
            "policy.pdf",
            "--schema",
            "custom.schema.json",
            "--no-ocr",
            "--mock-response",
            "canned.txt",
            "--pretty",
        ]);
        assert_eq!(cli.schema, PathBuf::from("custom.schema.json"));
        assert!(cli.no_ocr);
        assert_eq!(cli.mock_response, Some(PathBuf::from("canned.txt")));
        assert!(cli.pretty);
    }
}
