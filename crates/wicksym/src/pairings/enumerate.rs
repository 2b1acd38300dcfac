//! Exhaustive pairing enumeration (fix-smallest-slot recursion).

use crate::topology::VertexId;

/// Enumeration configuration.
#[derive(Clone, Copy, Debug)]
pub struct EnumerateCfg {
    /// Emit a progress event every this many completed pairings.
    pub log_every: u64,
}

impl Default for EnumerateCfg {
    fn default() -> Self {
        Self {
            log_every: 1_000_000,
        }
    }
}

/// Visit every perfect pairing of `owners` exactly once.
///
/// Each leaf hands the sink the working sequence with paired slots at
/// consecutive positions (0-1, 2-3, …). Returns the number of pairings
/// visited, `(S-1)!!` for `S` slots.
///
/// The slot at `start` is never moved, so it is always the smallest index
/// not yet paired; giving every remaining slot one turn as its partner
/// visits each unordered pairing once, with no duplicates and no omissions.
pub fn enumerate_pairings<F>(owners: &[VertexId], cfg: EnumerateCfg, visit: F) -> u64
where
    F: FnMut(&[VertexId]),
{
    assert!(
        owners.len() % 2 == 0,
        "pairing enumeration requires an even slot count, got {}",
        owners.len()
    );
    let mut runner = PairingRunner {
        seq: owners.to_vec(),
        visit,
        seen: 0,
        log_every: cfg.log_every.max(1),
    };
    runner.recur(0);
    runner.seen
}

/// Runner carrying the in-place working sequence and the leaf counter.
struct PairingRunner<F> {
    seq: Vec<VertexId>,
    visit: F,
    seen: u64,
    log_every: u64,
}

impl<F: FnMut(&[VertexId])> PairingRunner<F> {
    fn recur(&mut self, start: usize) {
        if start >= self.seq.len() {
            self.seen += 1;
            if self.seen % self.log_every == 0 {
                tracing::info!(pairings = self.seen, "enumeration progress");
            }
            (self.visit)(&self.seq);
            return;
        }
        for j in start + 1..self.seq.len() {
            self.seq.swap(start + 1, j);
            self.recur(start + 2);
            // Undo before the next partner so sibling subtrees start from
            // the same sequence.
            self.seq.swap(start + 1, j);
        }
    }
}
