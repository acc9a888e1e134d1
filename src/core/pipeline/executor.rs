//! Pipeline execution implementation.

use crate::core::fingerprint::Fingerprinter;
use crate::core::matcher::{DuplicateMatch, Matcher, DEFAULT_THRESHOLD};
use crate::core::scanner::{ImageScanner, ScanConfig, WalkDirScanner};
use crate::error::DupeScanError;
use crate::events::{
    null_sender, Event, EventSender, FingerprintEvent, FingerprintProgress, MatchEvent,
    PipelineEvent, PipelinePhase, PipelineSummary,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// A file that could not be processed, with the reason
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    /// Path to the file
    pub path: PathBuf,
    /// Why it was skipped
    pub reason: String,
}

/// Result of pipeline execution
#[derive(Debug)]
pub struct PipelineResult {
    /// Likely-duplicate matches, in processing order
    pub matches: Vec<DuplicateMatch>,
    /// Total image files discovered
    pub total_files: usize,
    /// Number of distinct fingerprints retained at the end of the run
    pub distinct_fingerprints: usize,
    /// Files skipped because they could not be decoded or fingerprinted
    pub skipped: Vec<SkippedFile>,
    /// Scan errors encountered (non-fatal)
    pub errors: Vec<String>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// Configuration for the pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directories to scan
    pub paths: Vec<PathBuf>,
    /// Maximum edit distance for a reported match
    pub threshold: usize,
    /// Scanner configuration
    pub scan_config: ScanConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            threshold: DEFAULT_THRESHOLD,
            scan_config: ScanConfig::default(),
        }
    }
}

/// Builder for pipeline configuration
pub struct PipelineBuilder {
    config: PipelineConfig,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    /// Add directories to scan
    pub fn paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.config.paths = paths;
        self
    }

    /// Set the match threshold
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set scanner configuration
    pub fn scan_config(mut self, config: ScanConfig) -> Self {
        self.config.scan_config = config;
        self
    }

    /// Include hidden files
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.config.scan_config.include_hidden = include;
        self
    }

    /// Limit directory traversal depth
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.config.scan_config.max_depth = depth;
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Pipeline {
        Pipeline {
            config: self.config,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The duplicate scan pipeline
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Run the pipeline without events
    pub fn run(&self) -> Result<PipelineResult, DupeScanError> {
        self.run_with_events(&null_sender())
    }

    /// Run the pipeline with event reporting
    pub fn run_with_events(&self, events: &EventSender) -> Result<PipelineResult, DupeScanError> {
        let start_time = Instant::now();
        let mut errors = Vec::new();

        events.send(Event::Pipeline(PipelineEvent::Started));

        // Phase 1: Scanning
        events.send(Event::Pipeline(PipelineEvent::PhaseChanged {
            phase: PipelinePhase::Scanning,
        }));

        let scanner = WalkDirScanner::new(self.config.scan_config.clone());
        let scan_result = scanner.scan_with_events(&self.config.paths, events)?;

        for error in scan_result.errors {
            warn!("scan error: {}", error);
            errors.push(error.to_string());
        }

        let mut files = scan_result.files;
        // Traversal order is OS-dependent; sort so "first seen" is stable
        // across runs, which pins which file a match reports as original.
        files.sort_by(|a, b| a.path.cmp(&b.path));

        let total_files = files.len();

        // Phase 2: Fingerprint & match, one file at a time
        events.send(Event::Pipeline(PipelineEvent::PhaseChanged {
            phase: PipelinePhase::Fingerprinting,
        }));
        events.send(Event::Fingerprint(FingerprintEvent::Started {
            total_files,
        }));

        let fingerprinter = Fingerprinter::new();
        let mut matcher = Matcher::new(self.config.threshold);
        let mut matches = Vec::new();
        let mut skipped = Vec::new();

        for (completed, file) in files.iter().enumerate() {
            events.send(Event::Fingerprint(FingerprintEvent::Progress(
                FingerprintProgress {
                    completed: completed + 1,
                    total: total_files,
                    current_path: file.path.clone(),
                },
            )));

            let fingerprint = match fingerprinter.fingerprint_file(&file.path) {
                Ok(fp) => fp,
                Err(e) => {
                    warn!("skipping {}: {}", file.path.display(), e);
                    events.send(Event::Fingerprint(FingerprintEvent::Skipped {
                        path: file.path.clone(),
                        message: e.to_string(),
                    }));
                    skipped.push(SkippedFile {
                        path: file.path.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if let Some(m) = matcher.submit(&file.path, fingerprint)? {
                info!(
                    "{} matches {} (distance: {})",
                    m.path.display(),
                    m.original.display(),
                    m.distance
                );
                events.send(Event::Match(MatchEvent::Found {
                    path: m.path.clone(),
                    original: m.original.clone(),
                    distance: m.distance,
                }));
                matches.push(m);
            }
        }

        events.send(Event::Fingerprint(FingerprintEvent::Completed {
            total_fingerprinted: total_files - skipped.len(),
            skipped: skipped.len(),
        }));

        let duration_ms = start_time.elapsed().as_millis() as u64;
        let distinct_fingerprints = matcher.store().len();

        events.send(Event::Pipeline(PipelineEvent::Completed {
            summary: PipelineSummary {
                total_files,
                matches_found: matches.len(),
                files_skipped: skipped.len(),
                distinct_fingerprints,
                duration_ms,
            },
        }));

        Ok(PipelineResult {
            matches,
            total_files,
            distinct_fingerprints,
            skipped,
            errors,
            duration_ms,
        })
    }
}
