//! Swell: an explicit finite-difference simulator for the scalar wave
//! equation on regular 1, 2, or 3 dimensional lattices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the swell sub-crates. For most users, adding `swell` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use swell::prelude::*;
//!
//! // A 2D membrane, driven by a decaying pluck at its center.
//! let pluck = PointOscillator::builder()
//!     .cell(&[32, 32])
//!     .window(1.0)
//!     .build()
//!     .unwrap();
//!
//! let mut sim = Integrator::builder()
//!     .shape(&[64, 64])
//!     .spacing(0.01)
//!     .speed(10.0)
//!     .dt(0.0005) // below 0.01 / (10 * sqrt(2))
//!     .stiffness(1.0)
//!     .source(pluck)
//!     .build()
//!     .unwrap();
//!
//! for _ in 0..100 {
//!     sim.step();
//! }
//!
//! // Hand the row-major snapshot to a renderer, or poke at cells.
//! assert_eq!(sim.field().len(), 64 * 64);
//! assert!(sim.read(&[32, 32]).is_ok());
//! assert!(sim.read(&[64, 0]).is_err());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `swell-grid` | Lattice shapes and double-buffered field storage |
//! | [`sim`] | `swell-sim` | Constants validation, the integrator, and sources |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Lattice shapes and double-buffered field storage (`swell-grid`).
pub use swell_grid as grid;

/// Constants validation, the integrator, and sources (`swell-sim`).
pub use swell_sim as sim;

/// The types most drivers need, re-exported flat.
pub mod prelude {
    pub use swell_grid::{Coord, Grid, GridError, Lattice};
    pub use swell_sim::{
        ConfigError, Integrator, MovingMonopole, NoiseKind, NoiseSource, PointOscillator,
        SimClock, Source, WaveConfig,
    };
}
