//! Double-buffered scalar field storage over a [`Lattice`].

use crate::error::GridError;
use crate::lattice::Lattice;
use std::mem;

/// Dense scalar field state for one simulated wave.
///
/// Owns three same-shaped buffers:
///
/// - `current` — the field as of the most recent committed step
/// - `previous` — the field exactly one step behind `current`
/// - `velocity` — scratch for per-cell instantaneous velocity, recomputed
///   every step and never carried across steps
///
/// The step protocol is two-phase (Jacobi-style): fill the velocity
/// scratch while `current`/`previous` are immutable (via
/// [`Grid::step_buffers`]), then commit with [`Grid::commit`], which swaps
/// the buffers in O(1) and writes the updated field. No full-buffer copy
/// is ever made.
///
/// Out-of-range reads via [`Grid::get_or_default`] return the grid's
/// boundary value — a fixed Dirichlet condition at the domain edge, so
/// outgoing waves are absorbed rather than reflected.
#[derive(Debug, Clone)]
pub struct Grid {
    lattice: Lattice,
    boundary_value: f64,
    current: Vec<f64>,
    previous: Vec<f64>,
    velocity: Vec<f64>,
}

impl Grid {
    /// Create a zero-initialized grid with boundary value `0.0`.
    pub fn new(lattice: Lattice) -> Self {
        Self::with_boundary_value(lattice, 0.0)
    }

    /// Create a zero-initialized grid with a custom boundary value for
    /// out-of-range reads.
    pub fn with_boundary_value(lattice: Lattice, boundary_value: f64) -> Self {
        let n = lattice.cell_count();
        Self {
            lattice,
            boundary_value,
            current: vec![0.0; n],
            previous: vec![0.0; n],
            velocity: vec![0.0; n],
        }
    }

    /// The underlying lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The value substituted for out-of-range reads.
    pub fn boundary_value(&self) -> f64 {
        self.boundary_value
    }

    /// Read a cell of the current field.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CoordOutOfBounds`] for out-of-range
    /// coordinates; the grid is untouched.
    pub fn get(&self, coord: &[i32]) -> Result<f64, GridError> {
        let i = self.lattice.checked_index(coord)?;
        Ok(self.current[i])
    }

    /// Write a cell of the current field.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CoordOutOfBounds`] for out-of-range
    /// coordinates; the grid is untouched.
    pub fn set(&mut self, coord: &[i32], value: f64) -> Result<(), GridError> {
        let i = self.lattice.checked_index(coord)?;
        self.current[i] = value;
        Ok(())
    }

    /// Read a cell of the current field, substituting the boundary value
    /// for any out-of-range coordinate. Never fails, never reads adjacent
    /// memory.
    pub fn get_or_default(&self, coord: &[i32]) -> f64 {
        match self.lattice.flat_index(coord) {
            Some(i) => self.current[i],
            None => self.boundary_value,
        }
    }

    /// Write the same value into `current` and `previous`, placing the
    /// cell at rest (zero backward-difference velocity).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CoordOutOfBounds`] for out-of-range
    /// coordinates; the grid is untouched.
    pub fn seed(&mut self, coord: &[i32], value: f64) -> Result<(), GridError> {
        let i = self.lattice.checked_index(coord)?;
        self.current[i] = value;
        self.previous[i] = value;
        Ok(())
    }

    /// The current field, flat in row-major order.
    pub fn current(&self) -> &[f64] {
        &self.current
    }

    /// Mutable access to the current field, flat in row-major order.
    ///
    /// For sources and drivers seeding state between steps; must not be
    /// held across a step.
    pub fn current_mut(&mut self) -> &mut [f64] {
        &mut self.current
    }

    /// The field one step behind `current`, flat in row-major order.
    pub fn previous(&self) -> &[f64] {
        &self.previous
    }

    /// Exchange `current` and `previous` in O(1).
    pub fn swap_buffers(&mut self) {
        mem::swap(&mut self.current, &mut self.previous);
    }

    /// Split-borrow view for the read/compute phase of a step: immutable
    /// `current`/`previous` alongside the mutable velocity scratch.
    pub fn step_buffers(&mut self) -> StepBuffers<'_> {
        StepBuffers {
            lattice: &self.lattice,
            boundary_value: self.boundary_value,
            current: &self.current,
            previous: &self.previous,
            velocity: &mut self.velocity,
        }
    }

    /// Commit one step: swap buffers, then write
    /// `current[i] = pre-step current[i] + velocity[i] * dt` for every
    /// cell.
    ///
    /// After the swap, `previous` holds the pre-step field exactly, so the
    /// write reads only committed pre-step values. Callers must have
    /// filled the velocity scratch first (via [`Grid::step_buffers`]).
    pub fn commit(&mut self, dt: f64) {
        self.swap_buffers();
        for ((c, &p), &v) in self
            .current
            .iter_mut()
            .zip(self.previous.iter())
            .zip(self.velocity.iter())
        {
            *c = p + v * dt;
        }
    }
}

/// Borrowed buffers for the read/compute phase of a step.
///
/// All reads of `current` and `previous` during velocity computation go
/// through this view, strictly before any write to the field: the borrow
/// split is the barrier between the read phase and the write phase.
#[derive(Debug)]
pub struct StepBuffers<'a> {
    /// The lattice shape and stride table.
    pub lattice: &'a Lattice,
    /// Value substituted for out-of-range neighbour reads.
    pub boundary_value: f64,
    /// The unmodified pre-step field.
    pub current: &'a [f64],
    /// The field one step behind `current`.
    pub previous: &'a [f64],
    /// Velocity scratch to fill, one slot per cell.
    pub velocity: &'a mut [f64],
}
