//! The [`Source`] trait: post-step field mutation policies.

use swell_grid::Grid;

/// A pluggable source policy, invoked once per step after the physics
/// update has been committed.
///
/// # Contract
///
/// - `apply()` MUST be deterministic: the same `(field, total_time)`
///   produces identical mutations. Stochastic sources derive their RNG
///   state from configuration plus `total_time`.
/// - `&self` — sources are stateless; anything time-varying is a function
///   of `total_time`.
/// - Injected values simply become part of the current field and feed the
///   next step's Laplacian like any other cell.
///
/// # Object safety
///
/// The trait is object-safe; the integrator stores an optional
/// `Box<dyn Source>`.
pub trait Source: Send + 'static {
    /// Mutate the field at simulated time `total_time`.
    fn apply(&self, grid: &mut Grid, total_time: f64);
}
