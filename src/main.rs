//! fast-image-info - print the format and dimensions of image files.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fast_image_info::{
    config::{Cli, Command, OutputArgs, OutputFormat, ProbeConfig, ScanConfig},
    probe_files, scan_directory, BatchSummary, ProbeOutcome,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Probe(config) => run_probe(config).await,
        Command::Scan(config) => run_scan(config).await,
    }
}

// =============================================================================
// Probe Command
// =============================================================================

async fn run_probe(config: ProbeConfig) -> ExitCode {
    init_logging(config.out.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let outcomes = probe_files(config.files, config.concurrency).await;
    report(&outcomes, &config.out)
}

// =============================================================================
// Scan Command
// =============================================================================

async fn run_scan(config: ScanConfig) -> ExitCode {
    init_logging(config.out.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let options = config.scan_options();
    let outcomes = match scan_directory(&config.dir, &options).await {
        Ok(outcomes) => outcomes,
        Err(e) => {
            error!("Failed to scan {}: {}", config.dir.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if outcomes.is_empty() && config.out.output == OutputFormat::Text {
        println!("No image files found in {}", config.dir.display());
    }

    report(&outcomes, &config.out)
}

// =============================================================================
// Output
// =============================================================================

/// Print outcomes and return the exit code for the batch.
fn report(outcomes: &[ProbeOutcome], out: &OutputArgs) -> ExitCode {
    let summary = BatchSummary::from_outcomes(outcomes);

    match out.output {
        OutputFormat::Text => print_text(outcomes, &summary),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "files": outcomes,
                "summary": summary,
            });
            match serde_json::to_string_pretty(&json) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    error!("Failed to serialize results: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    if summary.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_text(outcomes: &[ProbeOutcome], summary: &BatchSummary) {
    for outcome in outcomes {
        match (&outcome.info, &outcome.error) {
            (Some(info), _) => println!("✓ {}\t {}", outcome.path.display(), info),
            (None, Some(e)) => println!("✗ {}\t {}", outcome.path.display(), e),
            (None, None) => {}
        }
    }

    if summary.total > 1 {
        println!();
        println!(
            "{} file(s): {} probed, {} failed",
            summary.total, summary.succeeded, summary.failed
        );
    }
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "fast_image_info=debug"
    } else {
        "fast_image_info=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
