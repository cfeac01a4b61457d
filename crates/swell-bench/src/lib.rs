//! Benchmark support for the swell wave simulator.
//!
//! The interesting code lives in `benches/`; this library only provides
//! shared fixture builders so the bench targets stay small.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use swell_sim::Integrator;

/// Build an integrator over `extents` with a timestep at half the
/// stability bound, seeded with a unit impulse at the lattice center.
pub fn impulse_sim(extents: &[u32]) -> Integrator {
    let ndim = extents.len();
    let dt = 0.5 / (ndim as f64).sqrt();
    let mut sim = Integrator::builder()
        .shape(extents)
        .dt(dt)
        .build()
        .expect("bench fixture config is valid");
    let center: Vec<i32> = extents.iter().map(|&e| e as i32 / 2).collect();
    sim.seed(&center, 1.0).expect("center is in range");
    sim
}
