//! # Error Module
//!
//! User-friendly error types for the duplicate image scanner.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Fail loudly in the core** - fingerprinting and distance computation
//!   report precise error kinds; only the per-file driver loop absorbs them
//! - **User-friendly messages** - non-technical users should understand

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum DupeScanError {
    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Fingerprinting error: {0}")]
    Fingerprint(#[from] FingerprintError),

    #[error("Matching error: {0}")]
    Match(#[from] MatchError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors that occur while discovering image files
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Permission denied accessing: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while fingerprinting an image
#[derive(Error, Debug)]
pub enum FingerprintError {
    #[error("Failed to decode image {path}: {reason}")]
    DecodeError { path: PathBuf, reason: String },

    #[error("Failed to open image file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to resample image to the fingerprint grid: {reason}")]
    ResizeFailed { reason: String },
}

/// Errors from the similarity matcher
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Edit distance is undefined for an empty fingerprint")]
    EmptyFingerprint,
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, DupeScanError>;
