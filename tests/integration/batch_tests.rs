//! Batch probing over directories.
//!
//! Tests verify:
//! - Extension filtering and recursion when collecting files
//! - Per-file failures do not abort the batch
//! - Outcomes come back in input order

use std::fs;
use std::path::{Path, PathBuf};

use fast_image_info::{
    collect_files, probe_files, scan_directory, BatchSummary, ImageFormat, ScanOptions,
};

use super::test_utils::{gif_header, png_header, webp_header};

fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, bytes).unwrap();
    path
}

fn sample_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.png", &png_header(10, 20));
    write(dir.path(), "b.GIF", &gif_header(3, 4));
    write(dir.path(), "notes.txt", b"not an image");
    write(dir.path(), "broken.png", b"\x89PN");
    write(dir.path(), "nested/c.webp", &webp_header(5, 6));
    dir
}

fn names(paths: &[PathBuf], root: &Path) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

// =============================================================================
// collect_files
// =============================================================================

#[test]
fn test_collect_flat() {
    let dir = sample_tree();
    let files = collect_files(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(names(&files, dir.path()), vec!["a.png", "b.GIF", "broken.png"]);
}

#[test]
fn test_collect_recursive() {
    let dir = sample_tree();
    let options = ScanOptions {
        recursive: true,
        ..ScanOptions::default()
    };
    let files = collect_files(dir.path(), &options).unwrap();
    assert_eq!(
        names(&files, dir.path()),
        vec!["a.png", "b.GIF", "broken.png", "nested/c.webp"]
    );
}

#[test]
fn test_collect_extension_filter() {
    let dir = sample_tree();
    let options = ScanOptions {
        recursive: true,
        extensions: Some(vec!["webp".to_string()]),
        ..ScanOptions::default()
    };
    let files = collect_files(dir.path(), &options).unwrap();
    assert_eq!(names(&files, dir.path()), vec!["nested/c.webp"]);
}

#[test]
fn test_collect_recursive_reaches_every_depth() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "top.gif", &gif_header(1, 1));
    write(dir.path(), "one/two/three/deep.png", &png_header(2, 2));
    write(dir.path(), "one/two/skip.txt", b"text");

    let flat = collect_files(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(names(&flat, dir.path()), vec!["top.gif"]);

    let options = ScanOptions {
        recursive: true,
        ..ScanOptions::default()
    };
    let deep = collect_files(dir.path(), &options).unwrap();
    assert_eq!(
        names(&deep, dir.path()),
        vec!["one/two/three/deep.png", "top.gif"]
    );
}

#[test]
fn test_collect_missing_root() {
    let result = collect_files(Path::new("/no/such/root"), &ScanOptions::default());
    assert!(result.is_err());
}

// =============================================================================
// probe_files / scan_directory
// =============================================================================

#[tokio::test]
async fn test_scan_reports_failures_without_stopping() {
    let dir = sample_tree();
    let options = ScanOptions {
        recursive: true,
        concurrency: 2,
        ..ScanOptions::default()
    };

    let outcomes = scan_directory(dir.path(), &options).await.unwrap();
    assert_eq!(outcomes.len(), 4);

    let summary = BatchSummary::from_outcomes(&outcomes);
    assert_eq!(summary.succeeded, 3);
    assert_eq!(summary.failed, 1);

    let broken = outcomes
        .iter()
        .find(|o| o.path.ends_with("broken.png"))
        .unwrap();
    assert!(broken.error.as_deref().unwrap().contains("end of input"));

    let webp = outcomes
        .iter()
        .find(|o| o.path.ends_with("c.webp"))
        .unwrap();
    let info = webp.info.unwrap();
    assert_eq!(info.format(), ImageFormat::WebP);
    assert_eq!(info.dimensions(), (5, 6));
}

#[tokio::test]
async fn test_probe_files_keeps_input_order() {
    let dir = sample_tree();
    let paths = vec![
        dir.path().join("nested/c.webp"),
        dir.path().join("missing.png"),
        dir.path().join("a.png"),
        dir.path().join("b.GIF"),
    ];

    let outcomes = probe_files(paths.clone(), 1).await;
    let returned: Vec<PathBuf> = outcomes.iter().map(|o| o.path.clone()).collect();
    assert_eq!(returned, paths);

    assert!(outcomes[0].is_success());
    assert!(outcomes[1].error.as_deref().unwrap().starts_with("I/O error"));
    assert_eq!(outcomes[2].info.unwrap().dimensions(), (10, 20));
    assert_eq!(outcomes[3].info.unwrap().format(), ImageFormat::Gif);
}

#[tokio::test]
async fn test_probe_files_high_concurrency() {
    let dir = tempfile::tempdir().unwrap();
    let paths: Vec<PathBuf> = (1..=40u16)
        .map(|i| write(dir.path(), &format!("{:02}.gif", i), &gif_header(i, i * 2)))
        .collect();

    let outcomes = probe_files(paths, 16).await;
    assert_eq!(outcomes.len(), 40);
    for (i, outcome) in outcomes.iter().enumerate() {
        let n = i as u32 + 1;
        assert_eq!(outcome.info.unwrap().dimensions(), (n, n * 2));
    }
}
