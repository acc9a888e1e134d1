//! # Core Module
//!
//! The UI-agnostic similarity-detection engine.
//!
//! ## Modules
//! - `scanner` - Discovers image files in directories
//! - `fingerprint` - Derives brightness-grid fingerprints
//! - `matcher` - Finds near-duplicates by edit distance
//! - `pipeline` - Orchestrates the full workflow

pub mod fingerprint;
pub mod matcher;
pub mod pipeline;
pub mod scanner;

// Re-export commonly used types
pub use fingerprint::{Fingerprint, Fingerprinter};
pub use matcher::{DuplicateMatch, FingerprintStore, Matcher};
pub use scanner::ImageFile;
