//! Wick-pairing enumeration and Feynman diagram symmetry factors.
//!
//! Given external, three-point, and four-point vertex counts, this crate
//! enumerates every perfect pairing of the field slots, aggregates the
//! resulting diagrams by exact identity, consolidates them up to relabeling
//! of internal vertices, and derives each class's symmetry factor.
//!
//! The search is exhaustive and factorial in the slot count; it is meant for
//! small configurations that run to completion in one shot.

pub mod api;
pub mod diagram;
pub mod pairings;
pub mod report;
pub mod topology;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::diagram::Diagram;
    pub use crate::pairings::{run_census, Census, EnumerateCfg};
    pub use crate::report::{render_edges, symmetry_factor, VertexLabels};
    pub use crate::topology::{Topology, VertexId};
}
