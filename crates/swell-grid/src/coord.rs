//! The [`Coord`] type alias.

use smallvec::SmallVec;

/// Maximum number of spatial axes a lattice may have.
pub const MAX_AXES: usize = 3;

/// A lattice coordinate: one `i32` component per axis.
///
/// Components are signed so that stencil code can form out-of-range
/// neighbour coordinates (`-1`, `extent`) without wrapping; bounds checks
/// happen at the lattice, not in the coordinate type. Inline storage
/// covers all supported dimensionalities without heap allocation.
pub type Coord = SmallVec<[i32; MAX_AXES]>;
