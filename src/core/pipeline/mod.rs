//! # Pipeline Module
//!
//! Orchestrates the full duplicate scan workflow.
//!
//! ## Pipeline Stages
//! 1. **Scan** - Discover image files in the specified directories
//! 2. **Fingerprint & Match** - Fingerprint each file and compare it
//!    against everything seen so far, one file at a time
//!
//! ## Sequencing
//! Files are processed strictly sequentially, in sorted path order.
//! Which file gets reported as the "original" of a match depends on
//! processing order, so the order has to be stable across runs and
//! platforms.

mod executor;

pub use executor::{Pipeline, PipelineBuilder, PipelineResult, SkippedFile};
