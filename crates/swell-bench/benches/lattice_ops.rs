//! Criterion micro-benchmarks for lattice index arithmetic.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swell_grid::Lattice;

fn bench_flat_index(c: &mut Criterion) {
    let lat = Lattice::new(&[64, 64, 64]).unwrap();
    c.bench_function("lattice/flat_index_3d", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for x in 0..64 {
                acc = acc.wrapping_add(
                    lat.flat_index(black_box(&[x, 32, 17])).unwrap_or_default(),
                );
            }
            acc
        })
    });
}

fn bench_cell_iteration(c: &mut Criterion) {
    let lat = Lattice::new(&[128, 128]).unwrap();
    c.bench_function("lattice/cells_2d", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for coord in lat.cells() {
                acc += i64::from(coord[0] ^ coord[1]);
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_flat_index, bench_cell_iteration);
criterion_main!(benches);
