//! Criterion microbenches for the pairing search.
//!
//! - `enumerate`: raw leaf visiting, no aggregation.
//! - `census`: full pipeline including exact tally and consolidation.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wicksym::pairings::{enumerate_pairings, run_census, EnumerateCfg};
use wicksym::topology::Topology;

fn bench_pairings(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairings");
    for (e, t3, f4) in [(2usize, 2usize, 0usize), (0, 2, 1), (0, 4, 0)] {
        let topo = Topology::new(e, t3, f4).expect("even slot count");
        let owners = topo.field_owners();
        let label = format!("e{e}-t{t3}-f{f4}");

        group.bench_function(BenchmarkId::new("enumerate", &label), |b| {
            b.iter(|| enumerate_pairings(&owners, EnumerateCfg::default(), |_| {}))
        });
        group.bench_function(BenchmarkId::new("census", &label), |b| {
            b.iter(|| run_census(&topo, EnumerateCfg::default()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pairings);
criterion_main!(benches);
