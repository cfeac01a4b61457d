//! Error types for lattice construction and grid access.

use crate::coord::Coord;
use std::fmt;

/// Errors arising from lattice construction or grid access.
///
/// Out-of-range *reads inside the stencil* never produce these — they go
/// through [`Grid::get_or_default`](crate::Grid::get_or_default), which
/// substitutes the boundary value by design. `CoordOutOfBounds` is only
/// reported to callers using the checked `get`/`set` accessors, and a
/// failed access leaves the grid untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate is outside the bounds of the lattice, or has the
    /// wrong number of axes.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a lattice with no axes.
    EmptyShape,
    /// Attempted to construct a lattice with more axes than supported.
    TooManyAxes {
        /// Number of axes requested.
        ndim: usize,
        /// Maximum supported ([`MAX_AXES`](crate::MAX_AXES)).
        max: usize,
    },
    /// An axis extent is zero.
    ZeroExtent {
        /// Index of the degenerate axis.
        axis: usize,
    },
    /// An axis extent does not fit in a signed coordinate component.
    ExtentTooLarge {
        /// Index of the offending axis.
        axis: usize,
        /// The requested extent.
        extent: u32,
        /// Maximum representable extent.
        max: u32,
    },
    /// The product of the extents overflows the address space.
    TooManyCells,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
            Self::EmptyShape => write!(f, "lattice must have at least one axis"),
            Self::TooManyAxes { ndim, max } => {
                write!(f, "lattice has {ndim} axes, at most {max} supported")
            }
            Self::ZeroExtent { axis } => {
                write!(f, "axis {axis} has zero extent")
            }
            Self::ExtentTooLarge { axis, extent, max } => {
                write!(f, "axis {axis} extent {extent} exceeds maximum {max}")
            }
            Self::TooManyCells => write!(f, "extent product overflows the cell index space"),
        }
    }
}

impl std::error::Error for GridError {}
