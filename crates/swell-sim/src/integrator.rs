//! The leapfrog wave-equation integrator.

use crate::clock::SimClock;
use crate::config::WaveConfig;
use crate::error::ConfigError;
use crate::source::Source;
use swell_grid::{Grid, GridError, Lattice, MAX_AXES};

/// Explicit finite-difference integrator for the scalar wave equation.
///
/// Owns the [`Grid`], the validated [`WaveConfig`], the [`SimClock`], and
/// an optional [`Source`]. Each [`step`](Self::step) advances simulated
/// time by exactly one `dt`:
///
/// 1. For every cell, sum the second central difference over each axis,
///    divide by `spacing²` (the discrete Laplacian), and scale by
///    `speed²`.
/// 2. Take the backward-difference velocity
///    `(current - previous) / dt`, add the forward-Euler increment
///    `acc * dt`, and attenuate by `stiffness^(-dt)`.
/// 3. Store all velocities in the scratch buffer — every cell's stencil
///    reads the unmodified pre-step field (Jacobi-style; the borrow split
///    in [`Grid::step_buffers`] is the phase barrier).
/// 4. Swap buffers and commit `current = pre-step current + vel * dt`.
/// 5. Advance the clock, then let the source mutate the committed field.
///
/// There is no partial-step state: each call fully commits one advance
/// before returning. Construction fails fast on invalid constants, so
/// `step` itself cannot fail.
///
/// # Examples
///
/// ```
/// use swell_sim::Integrator;
///
/// let mut sim = Integrator::builder()
///     .shape(&[5])
///     .dt(0.5)
///     .build()
///     .unwrap();
/// sim.seed(&[2], 1.0).unwrap();
/// sim.step();
/// assert_eq!(sim.read(&[2]).unwrap(), 0.5);
/// assert_eq!(sim.current_time(), 0.5);
/// ```
pub struct Integrator {
    grid: Grid,
    config: WaveConfig,
    damping: f64,
    clock: SimClock,
    source: Option<Box<dyn Source>>,
}

/// Builder for [`Integrator`].
///
/// Required fields: `shape` and `dt`. Spacing, speed, and stiffness
/// default to 1.0; the boundary value defaults to 0.0.
pub struct IntegratorBuilder {
    shape: Option<Vec<u32>>,
    spacing: f64,
    speed: f64,
    dt: Option<f64>,
    stiffness: f64,
    boundary_value: f64,
    source: Option<Box<dyn Source>>,
}

impl Integrator {
    /// Create a new builder for configuring an `Integrator`.
    pub fn builder() -> IntegratorBuilder {
        IntegratorBuilder {
            shape: None,
            spacing: 1.0,
            speed: 1.0,
            dt: None,
            stiffness: 1.0,
            boundary_value: 0.0,
            source: None,
        }
    }

    /// Advance the simulation by exactly one `dt`.
    pub fn step(&mut self) {
        let dt = self.config.dt;
        let inv_h2 = 1.0 / (self.config.spacing * self.config.spacing);
        let c2 = self.config.speed * self.config.speed;
        let damping = self.damping;

        // Read/compute phase: every stencil read sees the pre-step field.
        {
            let bufs = self.grid.step_buffers();
            let lattice = bufs.lattice;
            let ndim = lattice.ndim();
            let extents = lattice.extents();
            let strides = lattice.strides();
            let boundary = bufs.boundary_value;
            let current = bufs.current;
            let previous = bufs.previous;

            // Row-major odometer tracking the coordinate of flat index i.
            let mut coord = [0i32; MAX_AXES];
            for (i, slot) in bufs.velocity.iter_mut().enumerate() {
                let center = current[i];
                let mut laplacian = 0.0;
                for axis in 0..ndim {
                    let stride = strides[axis];
                    let forward = if coord[axis] + 1 < extents[axis] as i32 {
                        current[i + stride]
                    } else {
                        boundary
                    };
                    let backward = if coord[axis] > 0 {
                        current[i - stride]
                    } else {
                        boundary
                    };
                    laplacian += (forward - center) - (center - backward);
                }
                let acc = c2 * laplacian * inv_h2;
                let mut vel = (center - previous[i]) / dt;
                vel += acc * dt;
                vel *= damping;
                *slot = vel;

                // Last axis varies fastest.
                for axis in (0..ndim).rev() {
                    coord[axis] += 1;
                    if coord[axis] < extents[axis] as i32 {
                        break;
                    }
                    coord[axis] = 0;
                }
            }
        }

        // Write phase: O(1) buffer swap, then apply the velocities.
        self.grid.commit(dt);
        self.clock.advance(dt);

        if let Some(source) = &self.source {
            source.apply(&mut self.grid, self.clock.total_time());
        }
    }

    /// Read one cell of the field.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CoordOutOfBounds`] for out-of-range
    /// coordinates.
    pub fn read(&self, coord: &[i32]) -> Result<f64, GridError> {
        self.grid.get(coord)
    }

    /// Write one cell of the field. For driver seeding between steps;
    /// leaves `previous` untouched, so the cell acquires velocity.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CoordOutOfBounds`] for out-of-range
    /// coordinates; the field is untouched.
    pub fn write(&mut self, coord: &[i32], value: f64) -> Result<(), GridError> {
        self.grid.set(coord, value)
    }

    /// Write one cell into both `current` and `previous`, placing it at
    /// rest.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CoordOutOfBounds`] for out-of-range
    /// coordinates; the field is untouched.
    pub fn seed(&mut self, coord: &[i32], value: f64) -> Result<(), GridError> {
        self.grid.seed(coord, value)
    }

    /// Full-buffer snapshot of the current field, row-major.
    pub fn field(&self) -> &[f64] {
        self.grid.current()
    }

    /// Sum of squared field values. A cheap energy proxy for damping and
    /// decay diagnostics.
    pub fn energy(&self) -> f64 {
        self.grid.current().iter().map(|v| v * v).sum()
    }

    /// Accumulated simulated time.
    pub fn current_time(&self) -> f64 {
        self.clock.total_time()
    }

    /// The simulation constants.
    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// The lattice shape.
    pub fn lattice(&self) -> &Lattice {
        self.grid.lattice()
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the underlying grid, for seeding state between
    /// steps. Never call concurrently with [`step`](Self::step).
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Install (or replace) the source invoked after each step.
    pub fn set_source(&mut self, source: impl Source) {
        self.source = Some(Box::new(source));
    }

    /// Remove the configured source, if any.
    pub fn clear_source(&mut self) {
        self.source = None;
    }
}

impl IntegratorBuilder {
    /// Set the per-axis extents of the lattice (1 to 3 axes).
    pub fn shape(mut self, extents: &[u32]) -> Self {
        self.shape = Some(extents.to_vec());
        self
    }

    /// Set the lattice spacing (default: 1.0). Must be > 0.
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the wave propagation speed (default: 1.0). Must be > 0.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the timestep. Must satisfy `dt <= spacing / (speed * sqrt(D))`.
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Set the stiffness damping base (default: 1.0, no damping).
    /// Must be >= 1.
    pub fn stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the value substituted for out-of-range stencil reads
    /// (default: 0.0).
    pub fn boundary_value(mut self, boundary_value: f64) -> Self {
        self.boundary_value = boundary_value;
        self
    }

    /// Install a source invoked after each step.
    pub fn source(mut self, source: impl Source) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Build the integrator, validating all configuration.
    ///
    /// # Errors
    ///
    /// Fails fast on a missing or invalid shape, a missing `dt`,
    /// non-positive `spacing`/`speed`/`dt`, `stiffness < 1`, or `dt`
    /// above the stability bound. A rejected configuration never yields
    /// a steppable integrator.
    pub fn build(self) -> Result<Integrator, ConfigError> {
        let shape = self.shape.ok_or(ConfigError::MissingShape)?;
        let lattice = Lattice::new(&shape).map_err(|reason| ConfigError::Shape { reason })?;
        let dt = self.dt.ok_or(ConfigError::MissingDt)?;
        let config = WaveConfig {
            spacing: self.spacing,
            speed: self.speed,
            dt,
            stiffness: self.stiffness,
        };
        config.validate(lattice.ndim())?;
        Ok(Integrator {
            grid: Grid::with_boundary_value(lattice, self.boundary_value),
            damping: config.damping_factor(),
            config,
            clock: SimClock::new(),
            source: self.source,
        })
    }
}
