// -------------------------------------------------------------------------
// SCPN Radiolysis -- Cross-Section Benchmark
// Full 28-channel evaluation and normalization across the energy range a
// cascade visits, from near-cutoff electrons to 100 keV primaries.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use radiolysis_core::cross_section::CrossSectionEvaluator;
use radiolysis_core::tables::ProcessTable;
use std::hint::black_box;

fn bench_cross_sections(c: &mut Criterion) {
    let table = ProcessTable::methane();
    let eval = CrossSectionEvaluator::new(&table, 1.0);
    let mut group = c.benchmark_group("cross_sections");

    for &energy in &[2.0f64, 30.0, 1.0e3, 1.0e5] {
        group.bench_with_input(
            BenchmarkId::new("probabilities", format!("{energy} eV")),
            &energy,
            |b, &e| b.iter(|| black_box(eval.probabilities(black_box(e)))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_cross_sections);
criterion_main!(benches);
