//! Edit-distance computation between fingerprints.
//!
//! Plain Levenshtein distance (insertions, deletions and substitutions,
//! each costing one operation) computed with the classic two-row
//! dynamic-programming recurrence. Adjacent transpositions are NOT
//! counted as a single operation; swapping two neighbouring symbols
//! costs two edits. The default match threshold is calibrated against
//! this metric.

use crate::error::MatchError;

/// Levenshtein edit distance between two symbol strings.
///
/// Handles unequal lengths; fingerprints happen to be fixed-length but
/// the algorithm does not rely on that. Rejects empty inputs - an empty
/// fingerprint cannot occur under normal operation, so hitting this is
/// a contract violation worth surfacing, not defaulting.
pub fn levenshtein(s: &str, t: &str) -> Result<usize, MatchError> {
    if s.is_empty() || t.is_empty() {
        return Err(MatchError::EmptyFingerprint);
    }

    let s: Vec<char> = s.chars().collect();
    let t: Vec<char> = t.chars().collect();
    let n = s.len();

    // Two-row DP: `prev` holds row j-1, `curr` is being filled for row j.
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr: Vec<usize> = vec![0; n + 1];

    for (j, &tc) in t.iter().enumerate() {
        curr[0] = j + 1;

        for i in 1..=n {
            let cost = if s[i - 1] == tc { 0 } else { 1 };
            curr[i] = (curr[i - 1] + 1).min(prev[i] + 1).min(prev[i - 1] + cost);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[n])
}
