//! Decaying point-oscillation source.
//!
//! Forces one designated cell to follow a prescribed oscillation whose
//! amplitude and frequency both ramp down linearly over a time window:
//!
//! ```text
//! strength = 1 - total_time / window          (while total_time < window)
//! cell     = sin(total_time * frequency * strength) * amplitude * strength
//! ```
//!
//! Once `total_time >= window` the source is permanently inert — the cell
//! evolves purely from physics thereafter.
//!
//! Constructed via the builder pattern: [`PointOscillator::builder`].

use crate::source::Source;
use smallvec::SmallVec;
use swell_grid::{Coord, Grid};

/// A time-limited forcing function that decays to silence.
#[derive(Debug, Clone)]
pub struct PointOscillator {
    cell: Coord,
    window: f64,
    frequency: f64,
    amplitude: f64,
}

/// Builder for [`PointOscillator`].
///
/// Required field: `cell`. Defaults match the original hand-tuned string
/// pluck: window 3.0, frequency 40.0, amplitude 0.3.
pub struct PointOscillatorBuilder {
    cell: Option<Coord>,
    window: f64,
    frequency: f64,
    amplitude: f64,
}

impl PointOscillator {
    /// Create a new builder for configuring a `PointOscillator`.
    pub fn builder() -> PointOscillatorBuilder {
        PointOscillatorBuilder {
            cell: None,
            window: 3.0,
            frequency: 40.0,
            amplitude: 0.3,
        }
    }

    /// The driven cell.
    pub fn cell(&self) -> &[i32] {
        &self.cell
    }

    /// The forcing window; the source never acts at or past this time.
    pub fn window(&self) -> f64 {
        self.window
    }
}

impl PointOscillatorBuilder {
    /// Set the cell to drive.
    pub fn cell(mut self, cell: &[i32]) -> Self {
        self.cell = Some(SmallVec::from_slice(cell));
        self
    }

    /// Set the forcing window in simulated seconds (default: 3.0).
    /// Must be > 0.
    pub fn window(mut self, window: f64) -> Self {
        self.window = window;
        self
    }

    /// Set the base angular frequency (default: 40.0). Must be > 0.
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the base amplitude (default: 0.3). Must be finite.
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Build the source, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `cell` is not set, `window` or `frequency` is not
    /// finite and positive, or `amplitude` is not finite.
    pub fn build(self) -> Result<PointOscillator, String> {
        let cell = self.cell.ok_or_else(|| "cell is required".to_string())?;
        if !self.window.is_finite() || !(self.window > 0.0) {
            return Err(format!(
                "window must be finite and > 0, got {}",
                self.window
            ));
        }
        if !self.frequency.is_finite() || !(self.frequency > 0.0) {
            return Err(format!(
                "frequency must be finite and > 0, got {}",
                self.frequency
            ));
        }
        if !self.amplitude.is_finite() {
            return Err(format!("amplitude must be finite, got {}", self.amplitude));
        }
        Ok(PointOscillator {
            cell,
            window: self.window,
            frequency: self.frequency,
            amplitude: self.amplitude,
        })
    }
}

impl Source for PointOscillator {
    fn apply(&self, grid: &mut Grid, total_time: f64) {
        if total_time >= self.window {
            return;
        }
        let strength = 1.0 - total_time / self.window;
        let value = (total_time * self.frequency * strength).sin() * self.amplitude * strength;
        // A cell outside the lattice is skipped, not an error.
        let _ = grid.set(&self.cell, value);
    }
}
