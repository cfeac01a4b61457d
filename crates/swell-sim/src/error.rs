//! Construction-time error types.

use std::fmt;
use swell_grid::GridError;

/// Errors from validating simulation constants at construction.
///
/// All of these are fatal: a rejected configuration never produces a
/// usable [`Integrator`](crate::Integrator), and there is nothing to
/// retry.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The lattice shape is invalid.
    Shape {
        /// The underlying shape error.
        reason: GridError,
    },
    /// `spacing` is not finite and positive.
    NonPositiveSpacing {
        /// The rejected value.
        spacing: f64,
    },
    /// `speed` is not finite and positive.
    NonPositiveSpeed {
        /// The rejected value.
        speed: f64,
    },
    /// `dt` is not finite and positive.
    NonPositiveDt {
        /// The rejected value.
        dt: f64,
    },
    /// `dt` exceeds the CFL-like stability bound
    /// `spacing / (speed * sqrt(D))`.
    UnstableDt {
        /// The rejected timestep.
        dt: f64,
        /// The maximum stable timestep for this configuration.
        max_dt: f64,
    },
    /// `stiffness` is below 1 (or not finite).
    StiffnessTooLow {
        /// The rejected value.
        stiffness: f64,
    },
    /// No timestep was supplied to the builder.
    MissingDt,
    /// No shape was supplied to the builder.
    MissingShape,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { reason } => write!(f, "invalid lattice shape: {reason}"),
            Self::NonPositiveSpacing { spacing } => {
                write!(f, "spacing must be finite and > 0, got {spacing}")
            }
            Self::NonPositiveSpeed { speed } => {
                write!(f, "speed must be finite and > 0, got {speed}")
            }
            Self::NonPositiveDt { dt } => {
                write!(f, "dt must be finite and > 0, got {dt}")
            }
            Self::UnstableDt { dt, max_dt } => {
                write!(
                    f,
                    "dt {dt} exceeds the stability bound {max_dt} (dt <= spacing / (speed * sqrt(D)))"
                )
            }
            Self::StiffnessTooLow { stiffness } => {
                write!(f, "stiffness must be finite and >= 1, got {stiffness}")
            }
            Self::MissingDt => write!(f, "dt is required"),
            Self::MissingShape => write!(f, "shape is required"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape { reason } => Some(reason),
            _ => None,
        }
    }
}
