//! Curated re-export surface for callers and experiments.

// Topology and derived constants
pub use crate::topology::{
    double_factorial, factorial, npow, Topology, TopologyError, VertexId,
};
// Diagram value type
pub use crate::diagram::Diagram;
// Pairing search pipeline
pub use crate::pairings::{
    consolidate, enumerate_pairings, run_census, Census, DiagramTally, EnumerateCfg,
    InvariantViolation,
};
// Report helpers
pub use crate::report::{render_edges, symmetry_factor, VertexLabels};
