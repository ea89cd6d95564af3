//! Probing many files at once.
//!
//! The core probe is synchronous and holds no shared state, so files are
//! simply fanned out onto tokio's blocking pool, at most `concurrency` at a
//! time. A failure on one file never stops the batch: each file gets its own
//! [`ProbeOutcome`].

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};
use walkdir::WalkDir;

use crate::error::ProbeError;
use crate::format::ImageFormat;
use crate::info::{probe_path, ImageInfo};

/// Default number of files probed in parallel.
pub const DEFAULT_CONCURRENCY: usize = 8;

// =============================================================================
// Options
// =============================================================================

/// How a directory is walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into subdirectories.
    pub recursive: bool,

    /// Maximum number of files probed at once.
    pub concurrency: usize,

    /// Extensions to include (lowercase, no dot). `None` means every
    /// extension known to [`ImageFormat`].
    pub extensions: Option<Vec<String>>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            concurrency: DEFAULT_CONCURRENCY,
            extensions: None,
        }
    }
}

impl ScanOptions {
    /// Whether `path` has an extension this scan includes.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();

        match &self.extensions {
            Some(allowed) => allowed
                .iter()
                .any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(&ext)),
            None => ImageFormat::from_extension(&ext).is_some(),
        }
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// Result of probing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    pub path: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ImageInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeOutcome {
    fn new(path: PathBuf, result: Result<ImageInfo, ProbeError>) -> Self {
        match result {
            Ok(info) => Self {
                path,
                info: Some(info),
                error: None,
            },
            Err(e) => Self {
                path,
                info: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.info.is_some()
    }
}

/// Counts over a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[ProbeOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

// =============================================================================
// Directory walk
// =============================================================================

/// List the files under `root` that the scan options include, sorted by path.
///
/// Unreadable subdirectories are logged and skipped; only a failure to read
/// `root` itself is an error.
pub fn collect_files(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, ProbeError> {
    let walker = if options.recursive {
        WalkDir::new(root)
    } else {
        WalkDir::new(root).max_depth(1)
    };

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(io::Error::from(e).into()),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if entry.depth() == 0 || entry.file_type().is_dir() {
            continue;
        }
        if options.matches(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(root = %root.display(), count = files.len(), "collected files");
    Ok(files)
}

// =============================================================================
// Parallel probe
// =============================================================================

/// Probe every path, at most `concurrency` at a time.
///
/// Outcomes are returned in the same order as `paths`, one per path.
pub async fn probe_files(paths: Vec<PathBuf>, concurrency: usize) -> Vec<ProbeOutcome> {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for (index, path) in paths.iter().cloned().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await.ok();
            (index, probe_one(path).await)
        });
    }

    let mut slots: Vec<Option<ProbeOutcome>> = vec![None; paths.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, outcome)) => slots[index] = Some(outcome),
            Err(e) => error!(error = %e, "probe task failed"),
        }
    }

    fill_missing(paths, slots)
}

/// Pair each path with its outcome, marking paths whose task never reported.
fn fill_missing(paths: Vec<PathBuf>, slots: Vec<Option<ProbeOutcome>>) -> Vec<ProbeOutcome> {
    paths
        .into_iter()
        .zip(slots)
        .map(|(path, slot)| {
            slot.unwrap_or_else(|| {
                ProbeOutcome::new(
                    path,
                    Err(ProbeError::Io("probe task did not complete".to_string())),
                )
            })
        })
        .collect()
}

/// Walk `root` and probe every matching file.
pub async fn scan_directory(
    root: &Path,
    options: &ScanOptions,
) -> Result<Vec<ProbeOutcome>, ProbeError> {
    let files = collect_files(root, options)?;
    Ok(probe_files(files, options.concurrency).await)
}

async fn probe_one(path: PathBuf) -> ProbeOutcome {
    let target = path.clone();
    let result = match tokio::task::spawn_blocking(move || probe_path(&target)).await {
        Ok(result) => result,
        Err(e) => Err(ProbeError::Io(format!("probe task failed: {}", e))),
    };

    match &result {
        Ok(info) => debug!(
            path = %path.display(),
            format = info.format().name(),
            width = info.width(),
            height = info.height(),
            "probed image"
        ),
        Err(e) => warn!(path = %path.display(), error = %e, "failed to probe image"),
    }

    ProbeOutcome::new(path, result)
}

// =============================================================================
// Tests
// =============================================================================
