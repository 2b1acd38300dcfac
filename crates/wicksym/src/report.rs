//! Report-side helpers: vertex labels, edge rendering, symmetry factors.
//!
//! The search itself only ever sees vertex indices; everything here exists
//! for the console/JSON report surface and for tests that pin down expected
//! output.

use std::fmt::Write as _;

use crate::diagram::Diagram;
use crate::pairings::InvariantViolation;
use crate::topology::{Topology, VertexId};

/// One-character vertex names: externals count up from `1`, internals
/// letter up from `a`, matching the report convention.
#[derive(Clone, Debug)]
pub struct VertexLabels {
    labels: Vec<char>,
}

impl VertexLabels {
    pub fn new(topo: &Topology) -> Self {
        let mut labels = Vec::with_capacity(topo.num_vertices());
        for i in 0..topo.num_external() {
            labels.push(char::from(b'1' + i as u8));
        }
        for i in 0..topo.num_internal() {
            labels.push(char::from(b'a' + i as u8));
        }
        Self { labels }
    }

    #[inline]
    pub fn get(&self, v: VertexId) -> char {
        self.labels[v.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.labels.iter().copied()
    }
}

/// Render the undirected edge set as `[x, y]` terms, with a `^m` exponent on
/// parallel edges: `[1, a] [a, a] [a, b]^2`.
pub fn render_edges(diagram: &Diagram, labels: &VertexLabels) -> String {
    let mut out = String::new();
    for (a, b, m) in diagram.edges() {
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = write!(out, "[{}, {}]", labels.get(a), labels.get(b));
        if m > 1 {
            let _ = write!(out, "^{m}");
        }
    }
    out
}

/// Symmetry factor of a diagram class: normalization factor divided by the
/// class multiplicity.
///
/// The division is exact for a correct census; a remainder means the
/// enumeration or consolidation is broken and is surfaced as an invariant
/// violation rather than rounded away.
pub fn symmetry_factor(normalization: u64, multiplicity: u64) -> Result<u64, InvariantViolation> {
    if multiplicity == 0 || normalization % multiplicity != 0 {
        return Err(InvariantViolation::IndivisibleSymmetryFactor {
            normalization,
            multiplicity,
        });
    }
    Ok(normalization / multiplicity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_externals_digits_internals_letters() {
        let topo = Topology::new(2, 2, 0).unwrap();
        let labels = VertexLabels::new(&topo);
        let all: Vec<char> = labels.iter().collect();
        assert_eq!(all, vec!['1', '2', 'a', 'b']);
        assert_eq!(labels.get(VertexId(0)), '1');
        assert_eq!(labels.get(VertexId(3)), 'b');
    }

    #[test]
    fn edge_rendering_with_exponents_and_tadpoles() {
        let topo = Topology::new(2, 2, 0).unwrap();
        let labels = VertexLabels::new(&topo);
        let owners: Vec<VertexId> = [0, 1, 2, 2, 2, 3, 2, 3]
            .iter()
            .map(|&i| VertexId(i))
            .collect();
        let diagram = Diagram::from_pairing(4, &owners);
        assert_eq!(render_edges(&diagram, &labels), "[1, 2] [a, a] [a, b]^2");
    }

    #[test]
    fn symmetry_factor_divides_exactly_or_errors() {
        assert_eq!(symmetry_factor(72, 9), Ok(8));
        assert_eq!(symmetry_factor(72, 6), Ok(12));
        assert_eq!(
            symmetry_factor(72, 5),
            Err(InvariantViolation::IndivisibleSymmetryFactor {
                normalization: 72,
                multiplicity: 5
            })
        );
        assert!(symmetry_factor(72, 0).is_err());
    }
}
