//! # Matcher Module
//!
//! Detects near-duplicate fingerprints with edit distance.
//!
//! ## How It Works
//! 1. Each new fingerprint is compared against every stored one, in the
//!    order they were first seen
//! 2. The first stored entry within the threshold is reported as the
//!    likely original, and scanning stops (one match per file at most)
//! 3. The new fingerprint is then retained, unless an identical key is
//!    already in the store
//!
//! ## Comparison Thresholds
//! Fingerprints are 1024 symbols, so distances range 0-1024:
//!
//! | Distance | Meaning                        |
//! |----------|--------------------------------|
//! | 0        | Identical brightness grid      |
//! | 1-25     | Likely duplicate (default cut) |
//! | 26+      | Treated as distinct            |

mod distance;
mod store;

pub use distance::levenshtein;
pub use store::FingerprintStore;

use crate::core::fingerprint::Fingerprint;
use crate::error::MatchError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default maximum edit distance for a reported match
pub const DEFAULT_THRESHOLD: usize = 25;

/// A reported likely-duplicate pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateMatch {
    /// The file just processed
    pub path: PathBuf,
    /// The earlier-seen file it matches
    pub original: PathBuf,
    /// Edit distance between the two fingerprints
    pub distance: usize,
}

/// Near-duplicate detector owning the fingerprint store.
///
/// The threshold is fixed at construction; it is a run-scoped constant.
/// Submissions must arrive in file-processing order - which entry is
/// reported as the original depends on it.
pub struct Matcher {
    store: FingerprintStore,
    threshold: usize,
}

impl Matcher {
    /// Create a matcher with an empty store and the given threshold
    pub fn new(threshold: usize) -> Self {
        Self {
            store: FingerprintStore::new(),
            threshold,
        }
    }

    /// Compare a new fingerprint against the store, then retain it.
    ///
    /// Scans stored entries in insertion order and reports at most one
    /// match: the first within threshold. Afterwards the fingerprint is
    /// inserted unless it already exists as a key, in which case the
    /// original mapping is preserved.
    pub fn submit(
        &mut self,
        file: &PathBuf,
        fingerprint: Fingerprint,
    ) -> Result<Option<DuplicateMatch>, MatchError> {
        let mut found = None;

        for (existing, original) in self.store.iter() {
            let distance = levenshtein(fingerprint.as_str(), existing.as_str())?;

            if distance <= self.threshold {
                found = Some(DuplicateMatch {
                    path: file.clone(),
                    original: original.clone(),
                    distance,
                });
                break;
            }
        }

        self.store.insert_if_absent(fingerprint, file.clone());

        Ok(found)
    }

    /// The threshold this matcher was built with
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Access the underlying store
    pub fn store(&self) -> &FingerprintStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(symbols: &str) -> Fingerprint {
        Fingerprint::from_symbols(symbols)
    }

    fn path(name: &str) -> PathBuf {
        PathBuf::from(name)
    }

    #[test]
    fn first_submission_never_matches() {
        let mut matcher = Matcher::new(DEFAULT_THRESHOLD);

        let result = matcher.submit(&path("a.jpg"), fp("0101")).unwrap();

        assert!(result.is_none());
        assert_eq!(matcher.store().len(), 1);
    }

    #[test]
    fn identical_fingerprints_match_at_any_threshold() {
        let mut matcher = Matcher::new(0);

        matcher.submit(&path("a.jpg"), fp("0101")).unwrap();
        let result = matcher.submit(&path("b.jpg"), fp("0101")).unwrap();

        let m = result.expect("identical fingerprints must match");
        assert_eq!(m.original, path("a.jpg"));
        assert_eq!(m.path, path("b.jpg"));
        assert_eq!(m.distance, 0);
    }

    #[test]
    fn first_match_short_circuits_in_insertion_order() {
        // A and B are both within threshold of C; only A (inserted
        // first) is reported.
        let mut matcher = Matcher::new(2);

        matcher.submit(&path("a.jpg"), fp("00000000")).unwrap();
        matcher.submit(&path("b.jpg"), fp("00000011")).unwrap();

        let result = matcher.submit(&path("c.jpg"), fp("00000001")).unwrap();

        let m = result.expect("c should match");
        assert_eq!(m.original, path("a.jpg"));

        // C's distinct fingerprint is still inserted afterwards
        assert_eq!(matcher.store().len(), 3);
        assert_eq!(
            matcher.store().get(&fp("00000001")),
            Some(&path("c.jpg"))
        );
    }

    #[test]
    fn exact_key_resubmission_keeps_original_mapping() {
        let mut matcher = Matcher::new(DEFAULT_THRESHOLD);

        matcher.submit(&path("original.jpg"), fp("0101")).unwrap();
        let result = matcher.submit(&path("copy.jpg"), fp("0101")).unwrap();

        assert!(result.is_some());
        assert_eq!(matcher.store().len(), 1);
        assert_eq!(matcher.store().get(&fp("0101")), Some(&path("original.jpg")));
    }

    #[test]
    fn matched_duplicate_key_never_becomes_distinct_entry() {
        // c matches a at distance 0 via b's short-circuit ordering, and
        // its identical fingerprint collapses into the existing key.
        let mut matcher = Matcher::new(0);

        matcher.submit(&path("a.jpg"), fp("1100")).unwrap();
        matcher.submit(&path("b.jpg"), fp("0011")).unwrap();
        let result = matcher.submit(&path("c.jpg"), fp("0011")).unwrap();

        let m = result.expect("c should match b exactly");
        assert_eq!(m.original, path("b.jpg"));
        assert_eq!(matcher.store().len(), 2);
        assert_eq!(matcher.store().get(&fp("0011")), Some(&path("b.jpg")));
    }

    #[test]
    fn threshold_zero_reports_exact_matches_only() {
        let mut matcher = Matcher::new(0);

        matcher.submit(&path("a.jpg"), fp("00000000")).unwrap();
        let near = matcher.submit(&path("b.jpg"), fp("00000001")).unwrap();

        assert!(near.is_none());
    }

    #[test]
    fn raising_threshold_is_monotone() {
        // The same submission sequence with a higher threshold can only
        // gain matches, never lose them.
        let sequence = [
            ("a.jpg", "00000000"),
            ("b.jpg", "00000011"),
            ("c.jpg", "11111111"),
            ("d.jpg", "00000000"),
        ];

        let run = |threshold: usize| -> Vec<PathBuf> {
            let mut matcher = Matcher::new(threshold);
            sequence
                .iter()
                .filter_map(|(name, symbols)| {
                    matcher.submit(&path(name), fp(symbols)).unwrap()
                })
                .map(|m| m.path)
                .collect()
        };

        let mut previous: Vec<PathBuf> = Vec::new();
        for threshold in [0, 2, 8, 1024] {
            let matched = run(threshold);
            for p in &previous {
                assert!(
                    matched.contains(p),
                    "threshold {threshold} lost match for {}",
                    p.display()
                );
            }
            previous = matched;
        }
    }

    #[test]
    fn empty_fingerprint_is_a_contract_violation() {
        let mut matcher = Matcher::new(DEFAULT_THRESHOLD);
        matcher.submit(&path("a.jpg"), fp("0101")).unwrap();

        let result = matcher.submit(&path("b.jpg"), fp(""));

        assert!(matches!(result, Err(MatchError::EmptyFingerprint)));
    }
}
