//! Merging tally entries equal under internal-vertex relabeling.

use crate::diagram::Diagram;

/// Fold exact-identity entries into classes under internal-permutation
/// equivalence.
///
/// Entries are scanned in their original order; the first member of each
/// class keeps its position and representative diagram, later equivalent
/// entries add their multiplicities to it. Output order is therefore
/// first-occurrence order, not any canonical sort.
pub fn consolidate(entries: Vec<(Diagram, u64)>, num_external: usize) -> Vec<(Diagram, u64)> {
    let mut merged: Vec<(Diagram, u64)> = Vec::new();
    for (diagram, n) in entries {
        match merged
            .iter_mut()
            .find(|(rep, _)| diagram.equal_under_internal_relabeling(rep, num_external))
        {
            Some((_, m)) => *m += n,
            None => merged.push((diagram, n)),
        }
    }
    merged
}
