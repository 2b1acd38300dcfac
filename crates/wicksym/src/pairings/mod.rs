//! Pairing search: enumeration, exact aggregation, consolidation.
//!
//! Purpose
//! - Drive the whole pipeline for one topology: visit every perfect pairing
//!   of the field slots, tally the diagram each one builds by exact matrix
//!   identity, then merge tally entries that agree up to relabeling of the
//!   internal vertices.
//!
//! The search is a single synchronous recursion; the working sequence inside
//! the enumerator is the only mutable state and is restored on unwind, so
//! the aggregation fold runs strictly one leaf at a time.

mod aggregate;
mod consolidate;
mod enumerate;

pub use aggregate::DiagramTally;
pub use consolidate::consolidate;
pub use enumerate::{enumerate_pairings, EnumerateCfg};

use std::fmt;

use crate::diagram::Diagram;
use crate::topology::Topology;

/// Invariant failures. These indicate a defect in the search itself, never
/// a user error, and must not be papered over.
#[derive(Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Pairing multiplicities do not sum to the expected `(S-1)!!`.
    PairingCountMismatch { observed: u64, expected: u64 },
    /// A class multiplicity does not divide the normalization factor.
    IndivisibleSymmetryFactor { normalization: u64, multiplicity: u64 },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PairingCountMismatch { observed, expected } => write!(
                f,
                "pairing count mismatch: observed {observed}, expected {expected}"
            ),
            Self::IndivisibleSymmetryFactor {
                normalization,
                multiplicity,
            } => write!(
                f,
                "multiplicity {multiplicity} does not divide normalization factor {normalization}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Completed search result.
#[derive(Clone, Debug)]
pub struct Census {
    /// Diagram classes in first-occurrence order, with pairing counts.
    pub consolidated: Vec<(Diagram, u64)>,
    /// Total pairings visited by the enumerator.
    pub total_pairings: u64,
    /// Distinct diagrams before consolidation (exact matrix identity).
    pub distinct_exact: usize,
}

/// Enumerate every pairing of `topo`'s field slots and aggregate the
/// resulting diagrams.
pub fn run_census(topo: &Topology, cfg: EnumerateCfg) -> Census {
    let owners = topo.field_owners();
    let num_vertices = topo.num_vertices();

    let mut tally = DiagramTally::new();
    let total_pairings = enumerate_pairings(&owners, cfg, |pairing| {
        tally.record(Diagram::from_pairing(num_vertices, pairing));
    });

    let distinct_exact = tally.len();
    let consolidated = consolidate(tally.into_entries(), topo.num_external());
    tracing::debug!(
        total_pairings,
        distinct_exact,
        classes = consolidated.len(),
        "census complete"
    );

    Census {
        consolidated,
        total_pairings,
        distinct_exact,
    }
}

impl Census {
    /// Conservation check: enumerator total and consolidated sum must both
    /// equal the topology's `(S-1)!!`.
    pub fn verify(&self, topo: &Topology) -> Result<(), InvariantViolation> {
        let expected = topo.expected_pairings();
        if self.total_pairings != expected {
            return Err(InvariantViolation::PairingCountMismatch {
                observed: self.total_pairings,
                expected,
            });
        }
        let consolidated_sum: u64 = self.consolidated.iter().map(|(_, n)| n).sum();
        if consolidated_sum != expected {
            return Err(InvariantViolation::PairingCountMismatch {
                observed: consolidated_sum,
                expected,
            });
        }
        Ok(())
    }

    /// Look up the class a given diagram belongs to, if any.
    pub fn find(&self, diagram: &Diagram, num_external: usize) -> Option<(&Diagram, u64)> {
        self.consolidated
            .iter()
            .find(|(rep, _)| rep.equal_under_internal_relabeling(diagram, num_external))
            .map(|(rep, n)| (rep, *n))
    }
}
