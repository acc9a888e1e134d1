//! Integration tests for the pipeline module.
//!
//! These tests verify end-to-end behavior: scanning real directories,
//! fingerprinting generated images, matching, and per-file error
//! recovery.

use image::{ImageBuffer, Rgb};
use image_dupe_scan::core::pipeline::Pipeline;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a solid-color PNG
fn write_solid_png(path: &Path, color: [u8; 3]) {
    let img = ImageBuffer::from_fn(64, 64, |_, _| Rgb(color));
    img.save(path).unwrap();
}

/// Write a PNG split into a dark left half and a bright right half,
/// with `split` controlling where the boundary falls (0-64).
fn write_split_png(path: &Path, split: u32) {
    let img = ImageBuffer::from_fn(64, 64, |x, _| {
        if x < split {
            Rgb([10u8, 10, 10])
        } else {
            Rgb([245u8, 245, 245])
        }
    });
    img.save(path).unwrap();
}

#[test]
fn pipeline_handles_empty_directory() {
    let temp_dir = TempDir::new().unwrap();

    let pipeline = Pipeline::builder()
        .paths(vec![temp_dir.path().to_path_buf()])
        .build();

    let result = pipeline.run().unwrap();

    assert_eq!(result.total_files, 0);
    assert!(result.matches.is_empty());
    assert!(result.skipped.is_empty());
}

#[test]
fn pipeline_handles_nonexistent_path() {
    let pipeline = Pipeline::builder()
        .paths(vec![PathBuf::from("/nonexistent/path/that/does/not/exist")])
        .build();

    // Should not panic - the bad root is recorded as a scan error
    let result = pipeline.run().unwrap();

    assert_eq!(result.total_files, 0);
    assert!(!result.errors.is_empty());
}

#[test]
fn identical_images_match_at_distance_zero() {
    let temp_dir = TempDir::new().unwrap();
    write_split_png(&temp_dir.path().join("a.png"), 32);
    write_split_png(&temp_dir.path().join("b.png"), 32);

    let pipeline = Pipeline::builder()
        .paths(vec![temp_dir.path().to_path_buf()])
        .threshold(0)
        .build();

    let result = pipeline.run().unwrap();

    assert_eq!(result.total_files, 2);
    assert_eq!(result.matches.len(), 1);

    let m = &result.matches[0];
    assert_eq!(m.distance, 0);
    assert!(m.original.ends_with("a.png"));
    assert!(m.path.ends_with("b.png"));
}

#[test]
fn near_duplicates_match_within_threshold() {
    let temp_dir = TempDir::new().unwrap();
    // Boundary moves by one source column: a handful of grid cells flip
    write_split_png(&temp_dir.path().join("a.png"), 32);
    write_split_png(&temp_dir.path().join("b.png"), 34);

    let pipeline = Pipeline::builder()
        .paths(vec![temp_dir.path().to_path_buf()])
        .threshold(64)
        .build();

    let result = pipeline.run().unwrap();

    assert_eq!(result.matches.len(), 1);
    let m = &result.matches[0];
    assert!(m.distance > 0, "the images differ");
    assert!(m.distance <= 64);
}

#[test]
fn distinct_images_do_not_match_at_tight_threshold() {
    let temp_dir = TempDir::new().unwrap();
    write_solid_png(&temp_dir.path().join("dark.png"), [10, 10, 10]);
    write_solid_png(&temp_dir.path().join("bright.png"), [245, 245, 245]);

    let pipeline = Pipeline::builder()
        .paths(vec![temp_dir.path().to_path_buf()])
        .threshold(25)
        .build();

    let result = pipeline.run().unwrap();

    // All-dark vs all-bright grids are 1024 substitutions apart
    assert!(result.matches.is_empty());
    assert_eq!(result.distinct_fingerprints, 2);
}

#[test]
fn corrupt_file_is_skipped_and_scan_continues() {
    let temp_dir = TempDir::new().unwrap();
    write_solid_png(&temp_dir.path().join("a.png"), [10, 10, 10]);
    std::fs::write(temp_dir.path().join("broken.jpg"), b"not an image").unwrap();
    write_solid_png(&temp_dir.path().join("c.png"), [10, 10, 10]);

    let pipeline = Pipeline::builder()
        .paths(vec![temp_dir.path().to_path_buf()])
        .threshold(0)
        .build();

    let result = pipeline.run().unwrap();

    assert_eq!(result.total_files, 3);
    assert_eq!(result.skipped.len(), 1);
    assert!(result.skipped[0].path.ends_with("broken.jpg"));

    // The surviving pair still matches
    assert_eq!(result.matches.len(), 1);
    assert!(result.matches[0].original.ends_with("a.png"));
    assert!(result.matches[0].path.ends_with("c.png"));
}

#[test]
fn non_image_files_are_not_scanned() {
    let temp_dir = TempDir::new().unwrap();
    write_solid_png(&temp_dir.path().join("photo.png"), [100, 100, 100]);
    std::fs::write(temp_dir.path().join("desktop.ini"), b"[ViewState]").unwrap();
    std::fs::write(temp_dir.path().join("notes.txt"), b"shopping list").unwrap();

    let pipeline = Pipeline::builder()
        .paths(vec![temp_dir.path().to_path_buf()])
        .build();

    let result = pipeline.run().unwrap();

    assert_eq!(result.total_files, 1);
    assert!(result.skipped.is_empty());
}

#[test]
fn first_seen_file_is_reported_as_original() {
    // Three identical images: the first (in sorted order) is the
    // original both times; the second never becomes a store key.
    let temp_dir = TempDir::new().unwrap();
    write_split_png(&temp_dir.path().join("1_first.png"), 20);
    write_split_png(&temp_dir.path().join("2_second.png"), 20);
    write_split_png(&temp_dir.path().join("3_third.png"), 20);

    let pipeline = Pipeline::builder()
        .paths(vec![temp_dir.path().to_path_buf()])
        .threshold(0)
        .build();

    let result = pipeline.run().unwrap();

    assert_eq!(result.matches.len(), 2);
    assert!(result.matches[0].original.ends_with("1_first.png"));
    assert!(result.matches[1].original.ends_with("1_first.png"));
    assert_eq!(result.distinct_fingerprints, 1);
}

#[test]
fn matches_survive_across_multiple_roots() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    write_split_png(&dir_a.path().join("original.png"), 16);
    write_split_png(&dir_b.path().join("copy.png"), 16);

    let pipeline = Pipeline::builder()
        .paths(vec![dir_a.path().to_path_buf(), dir_b.path().to_path_buf()])
        .threshold(0)
        .build();

    let result = pipeline.run().unwrap();

    assert_eq!(result.total_files, 2);
    assert_eq!(result.matches.len(), 1);
}
