//! Insertion-ordered fingerprint store.

use crate::core::fingerprint::Fingerprint;
use std::collections::HashMap;
use std::path::PathBuf;

/// Run-scoped mapping from each distinct fingerprint to the first file
/// that produced it.
///
/// Iteration follows insertion order, which is what makes the matcher's
/// first-match short-circuit deterministic: the earliest-seen candidate
/// within threshold is always the one reported. First-seen wins on key
/// collisions; a mapping is never overwritten.
pub struct FingerprintStore {
    /// Entries in insertion order
    entries: Vec<(Fingerprint, PathBuf)>,
    /// Index into `entries` for each key, for O(1) containment checks
    index: HashMap<Fingerprint, usize>,
}

impl FingerprintStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a fingerprint mapped to its originating file, unless the
    /// fingerprint is already a key. Returns true if the entry was
    /// inserted, false if the key already existed.
    pub fn insert_if_absent(&mut self, fingerprint: Fingerprint, file: PathBuf) -> bool {
        if self.index.contains_key(&fingerprint) {
            return false;
        }

        self.index.insert(fingerprint.clone(), self.entries.len());
        self.entries.push((fingerprint, file));
        true
    }

    /// Look up the file associated with an exact fingerprint key
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&PathBuf> {
        self.index.get(fingerprint).map(|&i| &self.entries[i].1)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Fingerprint, &PathBuf)> {
        self.entries.iter().map(|(fp, path)| (fp, path))
    }

    /// Number of distinct fingerprints retained
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no fingerprints
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FingerprintStore {
    fn default() -> Self {
        Self::new()
    }
}
