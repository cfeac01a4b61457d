//! Simulation constants and derived stability quantities.

use crate::error::ConfigError;

/// Smoothness factor for the resolvable-wavelength estimate: at least 8
/// lattice steps per wavelength for a visually smooth spherical front.
const STEPS_PER_WAVELENGTH: f64 = 8.0;

/// Immutable simulation constants for one [`Integrator`](crate::Integrator).
///
/// - `spacing` — distance between adjacent lattice points, uniform across
///   axes, `> 0`
/// - `speed` — wave propagation speed, `> 0`
/// - `dt` — timestep; must satisfy `dt <= spacing / (speed * sqrt(D))`
/// - `stiffness` — velocity attenuation base, `>= 1`; `1` disables damping
///
/// The stiffness formula (`vel *= stiffness^(-dt)` per step) is made up
/// and not physically meaningful; it exists to suppress numerical
/// blow-up and is preserved exactly for behavioral parity with runs that
/// rely on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveConfig {
    /// Distance between adjacent lattice points.
    pub spacing: f64,
    /// Wave propagation speed.
    pub speed: f64,
    /// Timestep per call to `step()`.
    pub dt: f64,
    /// Velocity attenuation base, `>= 1`.
    pub stiffness: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            speed: 1.0,
            dt: 0.1,
            stiffness: 1.0,
        }
    }
}

impl WaveConfig {
    /// Maximum stable timestep for a `ndim`-dimensional lattice:
    /// `spacing / (speed * sqrt(ndim))`.
    pub fn max_dt(&self, ndim: usize) -> f64 {
        self.spacing / (self.speed * (ndim as f64).sqrt())
    }

    /// Smallest wavelength the lattice resolves smoothly:
    /// `spacing * sqrt(ndim) * 8`.
    pub fn min_wavelength(&self, ndim: usize) -> f64 {
        self.spacing * (ndim as f64).sqrt() * STEPS_PER_WAVELENGTH
    }

    /// Highest source frequency worth driving:
    /// `speed / min_wavelength`.
    pub fn max_frequency(&self, ndim: usize) -> f64 {
        self.speed / self.min_wavelength(ndim)
    }

    /// Per-step velocity attenuation factor, `stiffness^(-dt)`.
    ///
    /// Exactly `1.0` when `stiffness == 1`, making the damping stage a
    /// bit-for-bit no-op.
    pub fn damping_factor(&self) -> f64 {
        self.stiffness.powf(-self.dt)
    }

    /// Validate the constants for a `ndim`-dimensional lattice.
    ///
    /// # Errors
    ///
    /// Fails fast on non-positive or non-finite `spacing`, `speed`, or
    /// `dt`, on `stiffness < 1`, and on `dt` strictly above
    /// [`max_dt`](Self::max_dt). `dt` exactly at the bound is accepted.
    pub fn validate(&self, ndim: usize) -> Result<(), ConfigError> {
        if !self.spacing.is_finite() || !(self.spacing > 0.0) {
            return Err(ConfigError::NonPositiveSpacing {
                spacing: self.spacing,
            });
        }
        if !self.speed.is_finite() || !(self.speed > 0.0) {
            return Err(ConfigError::NonPositiveSpeed { speed: self.speed });
        }
        if !self.dt.is_finite() || !(self.dt > 0.0) {
            return Err(ConfigError::NonPositiveDt { dt: self.dt });
        }
        if !self.stiffness.is_finite() || !(self.stiffness >= 1.0) {
            return Err(ConfigError::StiffnessTooLow {
                stiffness: self.stiffness,
            });
        }
        let max_dt = self.max_dt(ndim);
        if self.dt > max_dt {
            return Err(ConfigError::UnstableDt {
                dt: self.dt,
                max_dt,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dt: f64) -> WaveConfig {
        WaveConfig {
            spacing: 0.5,
            speed: 10.0,
            dt,
            stiffness: 1.0,
        }
    }

    #[test]
    fn dt_at_stability_bound_is_accepted() {
        let cfg = config(0.5 / (10.0 * 2.0_f64.sqrt()));
        assert!(cfg.validate(2).is_ok());
    }

    #[test]
    fn dt_above_stability_bound_is_rejected() {
        let max = 0.5 / (10.0 * 2.0_f64.sqrt());
        let cfg = config(max * 1.0001);
        assert!(matches!(
            cfg.validate(2),
            Err(ConfigError::UnstableDt { .. })
        ));
    }

    #[test]
    fn bound_tightens_with_dimensionality() {
        // Stable in 1D, unstable in 3D.
        let cfg = config(0.04);
        assert!(cfg.validate(1).is_ok());
        assert!(cfg.validate(3).is_err());
    }

    #[test]
    fn rejects_non_positive_constants() {
        let mut cfg = config(0.01);
        cfg.spacing = 0.0;
        assert!(matches!(
            cfg.validate(1),
            Err(ConfigError::NonPositiveSpacing { .. })
        ));

        let mut cfg = config(0.01);
        cfg.speed = -1.0;
        assert!(matches!(
            cfg.validate(1),
            Err(ConfigError::NonPositiveSpeed { .. })
        ));

        let cfg = config(0.0);
        assert!(matches!(
            cfg.validate(1),
            Err(ConfigError::NonPositiveDt { .. })
        ));
    }

    #[test]
    fn rejects_nan_constants() {
        let cfg = config(f64::NAN);
        assert!(matches!(
            cfg.validate(1),
            Err(ConfigError::NonPositiveDt { .. })
        ));

        let mut cfg = config(0.01);
        cfg.stiffness = f64::NAN;
        assert!(matches!(
            cfg.validate(1),
            Err(ConfigError::StiffnessTooLow { .. })
        ));
    }

    #[test]
    fn rejects_stiffness_below_one() {
        let mut cfg = config(0.01);
        cfg.stiffness = 0.9;
        assert!(matches!(
            cfg.validate(1),
            Err(ConfigError::StiffnessTooLow { .. })
        ));
        cfg.stiffness = 1.0;
        assert!(cfg.validate(1).is_ok());
    }

    #[test]
    fn derived_quantities_match_formulas() {
        let cfg = WaveConfig {
            spacing: 0.01,
            speed: 10.0,
            dt: 0.0001,
            stiffness: 1.0,
        };
        let sqrt2 = 2.0_f64.sqrt();
        assert!((cfg.max_dt(2) - 0.01 / (10.0 * sqrt2)).abs() < 1e-15);
        assert!((cfg.min_wavelength(2) - 0.01 * sqrt2 * 8.0).abs() < 1e-15);
        assert!((cfg.max_frequency(2) - 10.0 / (0.01 * sqrt2 * 8.0)).abs() < 1e-9);
    }

    #[test]
    fn unit_stiffness_damping_is_exactly_one() {
        let cfg = config(0.01);
        assert_eq!(cfg.damping_factor(), 1.0);
    }

    #[test]
    fn damping_factor_attenuates_for_stiff_configs() {
        let mut cfg = config(0.01);
        cfg.stiffness = 10.0;
        let factor = cfg.damping_factor();
        assert!(factor < 1.0 && factor > 0.0);
        assert!((factor - 10.0_f64.powf(-0.01)).abs() < 1e-15);
    }
}
