//! Travelling fixed-value monopole source.
//!
//! Holds one cell at a constant value while the cell's position oscillates
//! sinusoidally along a single axis around an anchor:
//!
//! ```text
//! offset = floor(sin(2π * travel_frequency * total_time) * travel_cells)
//! cell   = anchor with anchor[axis] + offset
//! ```
//!
//! Produces the characteristic Doppler-compressed wavefronts of a moving
//! emitter. Offsets that land outside the lattice are skipped for that
//! step.
//!
//! Constructed via the builder pattern: [`MovingMonopole::builder`].

use crate::source::Source;
use smallvec::SmallVec;
use swell_grid::{Coord, Grid};

/// A fixed-value source whose cell travels back and forth along one axis.
#[derive(Debug, Clone)]
pub struct MovingMonopole {
    anchor: Coord,
    axis: usize,
    value: f64,
    travel_cells: f64,
    travel_frequency: f64,
}

/// Builder for [`MovingMonopole`].
///
/// Required field: `anchor`. Defaults: axis 0, value 1.2, travel
/// amplitude 3 cells, travel frequency 1.0 Hz.
pub struct MovingMonopoleBuilder {
    anchor: Option<Coord>,
    axis: usize,
    value: f64,
    travel_cells: f64,
    travel_frequency: f64,
}

impl MovingMonopole {
    /// Create a new builder for configuring a `MovingMonopole`.
    pub fn builder() -> MovingMonopoleBuilder {
        MovingMonopoleBuilder {
            anchor: None,
            axis: 0,
            value: 1.2,
            travel_cells: 3.0,
            travel_frequency: 1.0,
        }
    }

    /// The cell driven at simulated time `total_time`.
    pub fn cell_at(&self, total_time: f64) -> Coord {
        let phase = std::f64::consts::TAU * self.travel_frequency * total_time;
        let offset = (phase.sin() * self.travel_cells).floor() as i32;
        let mut cell = self.anchor.clone();
        cell[self.axis] += offset;
        cell
    }
}

impl MovingMonopoleBuilder {
    /// Set the anchor cell the emitter travels around.
    pub fn anchor(mut self, anchor: &[i32]) -> Self {
        self.anchor = Some(SmallVec::from_slice(anchor));
        self
    }

    /// Set the travel axis (default: 0). Must index into the anchor.
    pub fn axis(mut self, axis: usize) -> Self {
        self.axis = axis;
        self
    }

    /// Set the held field value (default: 1.2). Must be finite.
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Set the travel amplitude in cells (default: 3.0). Must be finite
    /// and >= 0.
    pub fn travel_cells(mut self, travel_cells: f64) -> Self {
        self.travel_cells = travel_cells;
        self
    }

    /// Set the travel frequency in Hz (default: 1.0). Must be finite
    /// and > 0.
    pub fn travel_frequency(mut self, travel_frequency: f64) -> Self {
        self.travel_frequency = travel_frequency;
        self
    }

    /// Build the source, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `anchor` is not set, `axis` does not index into
    /// the anchor, `value` is not finite, `travel_cells` is negative or
    /// not finite, or `travel_frequency` is not finite and positive.
    pub fn build(self) -> Result<MovingMonopole, String> {
        let anchor = self.anchor.ok_or_else(|| "anchor is required".to_string())?;
        if self.axis >= anchor.len() {
            return Err(format!(
                "axis {} out of range for a {}-axis anchor",
                self.axis,
                anchor.len()
            ));
        }
        if !self.value.is_finite() {
            return Err(format!("value must be finite, got {}", self.value));
        }
        if !self.travel_cells.is_finite() || self.travel_cells < 0.0 {
            return Err(format!(
                "travel_cells must be finite and >= 0, got {}",
                self.travel_cells
            ));
        }
        if !self.travel_frequency.is_finite() || !(self.travel_frequency > 0.0) {
            return Err(format!(
                "travel_frequency must be finite and > 0, got {}",
                self.travel_frequency
            ));
        }
        Ok(MovingMonopole {
            anchor,
            axis: self.axis,
            value: self.value,
            travel_cells: self.travel_cells,
            travel_frequency: self.travel_frequency,
        })
    }
}

impl Source for MovingMonopole {
    fn apply(&self, grid: &mut Grid, total_time: f64) {
        let cell = self.cell_at(total_time);
        // Travel past the lattice edge skips the write for this step.
        let _ = grid.set(&cell, self.value);
    }
}
