//! Timing probe for the two-point φ³ census at second order.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how long does the
//!   full census take on the standard small configuration?"
//! - Double as a readable end-to-end demo: the five second-order classes and
//!   their symmetry factors 12, 8, 2, 2, 4 are textbook values.

use std::time::Instant;

use wicksym::prelude::*;

fn main() {
    let topo = Topology::new(2, 2, 0).expect("even field count");
    let labels = VertexLabels::new(&topo);

    let start = Instant::now();
    let census = run_census(&topo, EnumerateCfg::default());
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    census.verify(&topo).expect("pairing conservation");

    println!(
        "config external=2 three_point=2 four_point=0 fields={}",
        topo.num_fields()
    );
    println!(
        "pairings={} exact={} classes={} census_time_ms={elapsed_ms:.3}",
        census.total_pairings,
        census.distinct_exact,
        census.consolidated.len()
    );
    let normalization = topo.normalization_factor();
    for (diagram, n) in &census.consolidated {
        let factor = symmetry_factor(normalization, *n).expect("factor divides");
        println!(
            "count={n} symmetry_factor={factor} edges={}",
            render_edges(diagram, &labels)
        );
    }
}
