//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by the duplicate scan pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Scanning phase events
    Scan(ScanEvent),
    /// Fingerprinting phase events
    Fingerprint(FingerprintEvent),
    /// Match reporting events
    Match(MatchEvent),
    /// Pipeline-level events
    Pipeline(PipelineEvent),
}

/// Events during the scanning phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanEvent {
    /// Scanning has started
    Started { roots: Vec<PathBuf> },
    /// Progress update during scanning
    Progress(ScanProgress),
    /// An image file was found
    FileFound { path: PathBuf },
    /// An error occurred but scanning continues
    Error { path: PathBuf, message: String },
    /// Scanning completed
    Completed { total_files: usize },
}

/// Progress information during scanning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanProgress {
    /// Number of directories scanned so far
    pub directories_scanned: usize,
    /// Number of image files found so far
    pub files_found: usize,
    /// Current directory being scanned
    pub current_path: PathBuf,
}

/// Events during the fingerprint-and-match phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FingerprintEvent {
    /// Fingerprinting has started
    Started { total_files: usize },
    /// Progress update during fingerprinting
    Progress(FingerprintProgress),
    /// A file could not be fingerprinted; it is skipped, processing continues
    Skipped { path: PathBuf, message: String },
    /// Fingerprinting completed
    Completed {
        total_fingerprinted: usize,
        skipped: usize,
    },
}

/// Progress information during fingerprinting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingerprintProgress {
    /// Number of files processed so far
    pub completed: usize,
    /// Total number of files to process
    pub total: usize,
    /// Current file being fingerprinted
    pub current_path: PathBuf,
}

/// Match reporting events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A likely duplicate was found
    Found {
        /// The file just processed
        path: PathBuf,
        /// The earlier file it matches
        original: PathBuf,
        /// Edit distance between the two fingerprints
        distance: usize,
    },
}

/// Pipeline-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PipelineEvent {
    /// Pipeline has started
    Started,
    /// Moving to a new phase
    PhaseChanged { phase: PipelinePhase },
    /// Pipeline completed successfully
    Completed { summary: PipelineSummary },
    /// Pipeline encountered a fatal error
    Error { message: String },
}

/// Phases of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelinePhase {
    Scanning,
    Fingerprinting,
}

/// Summary of pipeline results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Total image files discovered
    pub total_files: usize,
    /// Number of likely-duplicate matches reported
    pub matches_found: usize,
    /// Number of files skipped because they could not be processed
    pub files_skipped: usize,
    /// Number of distinct fingerprints retained
    pub distinct_fingerprints: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelinePhase::Scanning => write!(f, "Scanning"),
            PipelinePhase::Fingerprinting => write!(f, "Fingerprinting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_serializable() {
        let event = Event::Scan(ScanEvent::Progress(ScanProgress {
            directories_scanned: 10,
            files_found: 50,
            current_path: PathBuf::from("/photos"),
        }));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized {
            Event::Scan(ScanEvent::Progress(p)) => {
                assert_eq!(p.files_found, 50);
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn match_event_round_trips() {
        let event = Event::Match(MatchEvent::Found {
            path: PathBuf::from("/photos/copy.jpg"),
            original: PathBuf::from("/photos/original.jpg"),
            distance: 12,
        });

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized {
            Event::Match(MatchEvent::Found { distance, .. }) => {
                assert_eq!(distance, 12);
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn pipeline_summary_is_serializable() {
        let summary = PipelineSummary {
            total_files: 1000,
            matches_found: 50,
            files_skipped: 3,
            distinct_fingerprints: 950,
            duration_ms: 5000,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("950"));
    }
}
