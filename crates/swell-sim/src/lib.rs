//! Explicit finite-difference integrator for the scalar wave equation on
//! a regular 1, 2, or 3 dimensional lattice.
//!
//! The [`Integrator`] advances a scalar field with a leapfrog-style
//! (central-difference-in-time) scheme:
//!
//! ```text
//! laplacian[i] = Σ_axes ((u[i+1] - u[i]) - (u[i] - u[i-1])) / spacing²
//! acc[i]       = speed² * laplacian[i]
//! vel[i]       = (current[i] - previous[i]) / dt + acc[i] * dt
//! vel[i]      *= stiffness^(-dt)
//! new[i]       = current[i] + vel[i] * dt
//! ```
//!
//! Out-of-range neighbour reads take the grid's boundary value, so the
//! domain edge behaves as a fixed Dirichlet condition. The stiffness
//! attenuation is a deliberately non-physical stabilizer, kept as a
//! configurable option; `stiffness == 1` makes it an exact no-op.
//!
//! Construction fails fast on invalid constants, including the CFL-like
//! stability bound `dt <= spacing / (speed * sqrt(D))` — the explicit
//! scheme is unconditionally unstable beyond it.
//!
//! After each committed step the configured [`Source`] (if any) may
//! mutate the field, modeling driven point sources.
//!
//! Rendering, pacing, and entry points are external: drivers call
//! [`Integrator::step`] and read the field back.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod clock;
mod config;
mod error;
mod integrator;
mod monopole;
mod noise;
mod oscillator;
mod source;

pub use clock::SimClock;
pub use config::WaveConfig;
pub use error::ConfigError;
pub use integrator::{Integrator, IntegratorBuilder};
pub use monopole::{MovingMonopole, MovingMonopoleBuilder};
pub use noise::{NoiseKind, NoiseSource, NoiseSourceBuilder};
pub use oscillator::{PointOscillator, PointOscillatorBuilder};
pub use source::Source;
