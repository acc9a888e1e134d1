//! # Image Dupe Scan
//!
//! Finds likely duplicate images by comparing brightness-grid
//! fingerprints with edit distance.
//!
//! ## Core Philosophy
//! - **Report, never touch** - matches are printed, files are left alone
//! - **One corrupt file never kills a scan** - decode failures are
//!   reported per file and the scan continues
//! - **Deterministic** - files are processed in sorted order, so the same
//!   directory always produces the same report
//!
//! ## Architecture
//! The library is split into a core engine (UI-agnostic) and presentation layers:
//! - `core` - The similarity-detection engine
//! - `events` - Event-driven progress reporting (GUI-ready)
//! - `error` - User-friendly error types
//! - `cli` - Command-line interface

pub mod cli;
pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{DupeScanError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or GUI).
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
