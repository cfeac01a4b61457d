//! Criterion benchmarks for whole-step throughput across dimensionalities.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swell_bench::impulse_sim;

fn bench_step(c: &mut Criterion) {
    // Comparable cell counts so the three cases measure stencil cost,
    // not working-set size.
    let cases: [(&str, &[u32]); 3] = [
        ("step/1d_4096", &[4096]),
        ("step/2d_64x64", &[64, 64]),
        ("step/3d_16x16x16", &[16, 16, 16]),
    ];
    for (name, extents) in cases {
        let mut sim = impulse_sim(extents);
        c.bench_function(name, |b| {
            b.iter(|| {
                sim.step();
                black_box(sim.energy())
            })
        });
    }
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
