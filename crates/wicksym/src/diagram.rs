//! Diagram value type: symmetric vertex-multiplicity matrix.
//!
//! Purpose
//! - Record, for one completed pairing, how many pairs connect each vertex
//!   pair. Cell `(i, j)` with `i != j` counts edges between `i` and `j`
//!   (stored symmetrically); cell `(i, i)` counts self-pairings (tadpoles),
//!   once per pair.
//! - Provide the two equality notions the search needs: literal matrix
//!   identity, and equality up to relabeling of the internal vertex range.
//!
//! A `Diagram` is built once from a pairing and never mutated afterwards.

use itertools::Itertools;
use nalgebra::DMatrix;

use crate::topology::VertexId;

/// Vertex-indexed multigraph for one pairing.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagram {
    adj: DMatrix<u32>,
}

impl Eq for Diagram {}

impl Diagram {
    fn empty(num_vertices: usize) -> Self {
        Self {
            adj: DMatrix::zeros(num_vertices, num_vertices),
        }
    }

    /// Build from a completed pairing. Paired slots are consecutive elements
    /// of `owners`: indices 0-1, 2-3, 4-5, …
    pub fn from_pairing(num_vertices: usize, owners: &[VertexId]) -> Self {
        debug_assert!(owners.len() % 2 == 0);
        let mut diagram = Self::empty(num_vertices);
        for pair in owners.chunks_exact(2) {
            diagram.add_edge(pair[0], pair[1]);
        }
        diagram
    }

    // Edges are undirected so off-diagonal cells are incremented on both
    // sides; a tadpole touches the diagonal exactly once.
    fn add_edge(&mut self, a: VertexId, b: VertexId) {
        self.adj[(a.0, b.0)] += 1;
        if a != b {
            self.adj[(b.0, a.0)] += 1;
        }
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adj.nrows()
    }

    /// Number of pairs connecting `a` and `b` (tadpole count for `a == b`).
    #[inline]
    pub fn multiplicity(&self, a: VertexId, b: VertexId) -> u32 {
        self.adj[(a.0, b.0)]
    }

    /// Total pairs accounted for: upper triangle plus diagonal. Equals `S/2`
    /// for a diagram built from a complete pairing of `S` slots.
    pub fn num_pairs(&self) -> u64 {
        let n = self.num_vertices();
        let mut total = 0u64;
        for i in 0..n {
            for j in i..n {
                total += u64::from(self.adj[(i, j)]);
            }
        }
        total
    }

    /// Occupied upper-triangle cells as `(a, b, multiplicity)`, tadpoles
    /// included, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, u32)> + '_ {
        let n = self.num_vertices();
        (0..n)
            .flat_map(move |i| (i..n).map(move |j| (i, j)))
            .filter_map(move |(i, j)| {
                let m = self.adj[(i, j)];
                (m > 0).then_some((VertexId(i), VertexId(j), m))
            })
    }

    /// Equality after relabeling internal vertices only.
    ///
    /// Indices below `num_external` stay fixed; every permutation of the
    /// range `num_external..V` is tried in a fixed lexicographic order.
    /// Short-circuits on the first cell mismatch per candidate and on the
    /// first fully matching permutation. Cost is `(V - num_external)!`
    /// candidates in the worst case; fine for the small internal counts this
    /// system targets.
    pub fn equal_under_internal_relabeling(&self, other: &Diagram, num_external: usize) -> bool {
        let n = self.num_vertices();
        if other.num_vertices() != n {
            return false;
        }
        debug_assert!(num_external <= n);

        let internal_len = n - num_external;
        let mut map: Vec<usize> = (0..n).collect();
        'candidates: for perm in (num_external..n).permutations(internal_len) {
            map[num_external..].copy_from_slice(&perm);
            for i in 0..n {
                for j in i..n {
                    if self.adj[(i, j)] != other.adj[(map[i], map[j])] {
                        continue 'candidates;
                    }
                }
            }
            return true;
        }
        false
    }
}
