//! Command-line configuration for the `fast-image-info` binary.
//!
//! This module provides:
//! - Subcommands via clap (`probe` for explicit files, `scan` for a directory)
//! - Environment variables with `FII_` prefix for scan settings
//! - Defaults for all optional settings
//!
//! # Environment Variables
//!
//! - `FII_RECURSIVE` - Descend into subdirectories when scanning (default: false)
//! - `FII_CONCURRENCY` - Files probed in parallel (default: 8)
//! - `FII_EXTENSIONS` - Comma-separated extension filter (default: all known)
//! - `FII_OUTPUT` - Output format, `text` or `json` (default: text)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::batch::{ScanOptions, DEFAULT_CONCURRENCY};

// =============================================================================
// Default Values
// =============================================================================

/// Upper bound on parallel probes.
pub const MAX_CONCURRENCY: usize = 256;

// =============================================================================
// CLI Arguments
// =============================================================================

/// fast-image-info - read image format and dimensions from file headers.
///
/// Supports GIF, JPEG, PNG, BMP, WebP and TIFF. Pixel data is never decoded.
#[derive(Parser, Debug, Clone)]
#[command(name = "fast-image-info")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Unwrap the selected subcommand.
    pub fn into_command(self) -> Command {
        self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Probe one or more image files.
    Probe(ProbeConfig),

    /// Probe every image file in a directory.
    Scan(ScanConfig),
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per file
    #[default]
    Text,
    /// A JSON document with every outcome and a summary
    Json,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format.
    #[arg(long = "output", value_enum, default_value_t = OutputFormat::Text, env = "FII_OUTPUT")]
    pub output: OutputFormat,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

// =============================================================================
// Probe Command
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct ProbeConfig {
    /// Image files to probe.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Files probed in parallel.
    #[arg(short = 'j', long, default_value_t = DEFAULT_CONCURRENCY, env = "FII_CONCURRENCY")]
    pub concurrency: usize,

    #[command(flatten)]
    pub out: OutputArgs,
}

impl ProbeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.files.is_empty() {
            return Err("at least one file is required".to_string());
        }
        validate_concurrency(self.concurrency)
    }
}

// =============================================================================
// Scan Command
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct ScanConfig {
    /// Directory to scan.
    pub dir: PathBuf,

    /// Descend into subdirectories.
    #[arg(short, long, default_value_t = false, env = "FII_RECURSIVE")]
    pub recursive: bool,

    /// Files probed in parallel.
    #[arg(short = 'j', long, default_value_t = DEFAULT_CONCURRENCY, env = "FII_CONCURRENCY")]
    pub concurrency: usize,

    /// Only include these extensions (comma-separated, e.g. `png,jpg`).
    ///
    /// If not specified, every extension of a supported format is included.
    #[arg(long = "ext", env = "FII_EXTENSIONS", value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    #[command(flatten)]
    pub out: OutputArgs,
}

impl ScanConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.dir.is_dir() {
            return Err(format!("{} is not a directory", self.dir.display()));
        }

        if let Some(ref extensions) = self.extensions {
            if extensions.iter().any(|e| e.trim_start_matches('.').is_empty()) {
                return Err("extension filter contains an empty entry".to_string());
            }
        }

        validate_concurrency(self.concurrency)
    }

    /// Scan options for the batch layer.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            recursive: self.recursive,
            concurrency: self.concurrency,
            extensions: self.extensions.as_ref().map(|list| {
                list.iter()
                    .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                    .collect()
            }),
        }
    }
}

fn validate_concurrency(concurrency: usize) -> Result<(), String> {
    if concurrency == 0 || concurrency > MAX_CONCURRENCY {
        return Err(format!(
            "concurrency must be between 1 and {}",
            MAX_CONCURRENCY
        ));
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
