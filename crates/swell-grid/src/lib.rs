//! Regular lattice and double-buffered scalar field storage for the swell
//! wave simulator.
//!
//! This is the leaf crate of the workspace. It defines:
//!
//! - [`Lattice`] — a validated 1, 2, or 3 dimensional rectangular lattice
//!   with row-major index flattening (last axis fastest-varying).
//! - [`Grid`] — dense `current`/`previous` scalar buffers over a lattice,
//!   plus a velocity scratch buffer, with O(1) buffer swapping and
//!   bounds-defaulting reads for open-boundary stencils.
//! - [`GridError`] — typed errors for shape validation and caller-facing
//!   out-of-range access.
//!
//! Out-of-range reads through [`Grid::get_or_default`] never fail: they
//! return the grid's boundary value. This is a fixed Dirichlet condition at
//! the domain edge, the open-boundary approximation the integrator builds
//! its Laplacian on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod coord;
mod error;
mod grid;
mod lattice;

pub use coord::{Coord, MAX_AXES};
pub use error::GridError;
pub use grid::{Grid, StepBuffers};
pub use lattice::{CellIter, Lattice};
