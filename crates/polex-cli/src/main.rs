//! Polex CLI - extract structured records from insurance policy PDFs.

mod cli;
mod error;

use clap::Parser;
use cli::Cli;
use error::{CliError, Result};
use polex_acquire::{AcquireConfig, TextAcquirer};
use polex_domain::ExtractionResponse;
use polex_extractor::{ExtractionOutcome, ExtractionRequest, PipelineConfig, PolicyExtractor, ResponseParser};
use polex_llm::{MockModel, OpenAiModel};
use polex_validate::SchemaValidator;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let acquire_config = AcquireConfig::default();
    let pipeline_config = PipelineConfig::default();

    // Step 1: acquire text from the document
    let acquirer = TextAcquirer::new(acquire_config);
    let text = acquirer.acquire(&cli.document, !cli.no_ocr)?;

    let text_len = text.trim().chars().count();
    if text_len < pipeline_config.min_text_length {
        return Err(CliError::InvalidInput(
            "Could not extract meaningful text from the document. \
             The file may be corrupted or image-only."
                .to_string(),
        ));
    }
    info!("Acquired {} characters from {}", text_len, cli.document.display());

    // Step 2: extract the structured record
    let validator = SchemaValidator::from_file(&cli.schema)?;
    let source_id = cli
        .document
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.document.display().to_string());
    let request = ExtractionRequest { text, source_id };

    let outcome = extract(&cli, pipeline_config, request).await?;

    // Step 3: validate and emit the boundary response
    let report = validator.validate(&outcome.document);
    if !report.is_valid {
        warn!("Validation found {} errors", report.errors.len());
    }

    let response = ExtractionResponse::new(outcome.document, report);
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", rendered);

    Ok(())
}

async fn extract(
    cli: &Cli,
    config: PipelineConfig,
    request: ExtractionRequest,
) -> Result<ExtractionOutcome> {
    let parser = ResponseParser::standard();

    match &cli.mock_response {
        Some(path) => {
            let canned = std::fs::read_to_string(path)?;
            let extractor = PolicyExtractor::new(MockModel::new(canned), parser, config)
                .with_model_name("mock");
            Ok(extractor.extract(request).await?)
        }
        None => {
            let api_key = cli.api_key.clone().ok_or(CliError::MissingApiKey)?;
            let model = OpenAiModel::new(&cli.endpoint, api_key, &cli.model);
            let extractor =
                PolicyExtractor::new(model, parser, config).with_model_name(&cli.model);
            Ok(extractor.extract(request).await?)
        }
    }
}
