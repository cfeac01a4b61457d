//! Accumulated simulated time.

/// Monotonic simulation clock.
///
/// Owned and advanced only by the [`Integrator`](crate::Integrator),
/// exactly once per step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    total_time: f64,
}

impl SimClock {
    /// A clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one timestep.
    pub fn advance(&mut self, dt: f64) {
        self.total_time += dt;
    }

    /// Accumulated elapsed simulated time.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}
