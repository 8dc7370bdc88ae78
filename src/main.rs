use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use control_operativo_pdf::cli::Args;
use control_operativo_pdf::config::Settings;
use control_operativo_pdf::error::ConfigError;
use control_operativo_pdf::generate_report;
use control_operativo_pdf::merge::{GhostscriptMerger, PageMerger, PassthroughMerger};
use control_operativo_pdf::model::CaseDocument;
use control_operativo_pdf::render::FileAssetResolver;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Read input file
    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;

    let document: CaseDocument = serde_json::from_str(&json)
        .map_err(|e| ConfigError::InvalidCase(e.to_string()))
        .with_context(|| format!("Failed to parse case file: {}", args.input.display()))?;

    log::info!(
        "Loaded case {} with {} attachments",
        document.case.id,
        document.attachments.len()
    );

    let settings = Settings::from_args(&args);
    let assets = FileAssetResolver::new(settings.crest_candidates.clone());

    let ghostscript;
    let merger: &dyn PageMerger = if settings.merge_enabled {
        ghostscript = GhostscriptMerger::new(settings.merge_binary.clone());
        &ghostscript
    } else {
        &PassthroughMerger
    };

    let report = generate_report(
        &document.case,
        &document.attachments,
        &settings,
        &assets,
        merger,
    )
    .with_context(|| "Failed to generate PDF")?;

    // Write output
    let output_path = args.output_path(document.case.id);
    fs::write(&output_path, &report.bytes)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!(
        "Successfully wrote PDF to {} ({} bytes)",
        output_path.display(),
        report.headers.content_length
    );

    Ok(())
}
