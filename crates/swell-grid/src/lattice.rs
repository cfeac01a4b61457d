//! Validated rectangular lattice with row-major index flattening.

use crate::coord::{Coord, MAX_AXES};
use crate::error::GridError;
use smallvec::SmallVec;

/// A rectangular lattice of 1, 2, or 3 spatial axes.
///
/// Cells are addressed by [`Coord`]s with one component per axis, each in
/// `[0, extent)`. Flat storage uses row-major order: the last axis varies
/// fastest, so for a `[rows, cols]` lattice cell `[r, c]` maps to
/// `r * cols + c`.
///
/// # Examples
///
/// ```
/// use swell_grid::Lattice;
///
/// let lat = Lattice::new(&[4, 3]).unwrap();
/// assert_eq!(lat.ndim(), 2);
/// assert_eq!(lat.cell_count(), 12);
/// assert_eq!(lat.flat_index(&[1, 2]), Some(5));
/// assert_eq!(lat.flat_index(&[-1, 0]), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    extents: SmallVec<[u32; MAX_AXES]>,
    strides: SmallVec<[usize; MAX_AXES]>,
    cell_count: usize,
}

impl Lattice {
    /// Maximum extent per axis: coordinates use `i32`, so extents must fit.
    pub const MAX_EXTENT: u32 = i32::MAX as u32;

    /// Create a lattice from per-axis extents.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyShape`] if `extents` is empty
    /// - [`GridError::TooManyAxes`] if more than [`MAX_AXES`] axes
    /// - [`GridError::ZeroExtent`] if any extent is zero
    /// - [`GridError::ExtentTooLarge`] if any extent exceeds [`Self::MAX_EXTENT`]
    /// - [`GridError::TooManyCells`] if the extent product overflows `usize`
    pub fn new(extents: &[u32]) -> Result<Self, GridError> {
        if extents.is_empty() {
            return Err(GridError::EmptyShape);
        }
        if extents.len() > MAX_AXES {
            return Err(GridError::TooManyAxes {
                ndim: extents.len(),
                max: MAX_AXES,
            });
        }
        for (axis, &extent) in extents.iter().enumerate() {
            if extent == 0 {
                return Err(GridError::ZeroExtent { axis });
            }
            if extent > Self::MAX_EXTENT {
                return Err(GridError::ExtentTooLarge {
                    axis,
                    extent,
                    max: Self::MAX_EXTENT,
                });
            }
        }

        let mut cell_count: usize = 1;
        for &extent in extents {
            cell_count = cell_count
                .checked_mul(extent as usize)
                .ok_or(GridError::TooManyCells)?;
        }

        // Row-major strides: last axis has stride 1.
        let mut strides: SmallVec<[usize; MAX_AXES]> = SmallVec::from_elem(1, extents.len());
        for axis in (0..extents.len().saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * extents[axis + 1] as usize;
        }

        Ok(Self {
            extents: SmallVec::from_slice(extents),
            strides,
            cell_count,
        })
    }

    /// Number of spatial axes.
    pub fn ndim(&self) -> usize {
        self.extents.len()
    }

    /// Per-axis extents.
    pub fn extents(&self) -> &[u32] {
        &self.extents
    }

    /// Per-axis flat-index strides (row-major, last axis is 1).
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Whether every component of `coord` is within its axis extent and
    /// the axis count matches.
    pub fn contains(&self, coord: &[i32]) -> bool {
        coord.len() == self.ndim()
            && coord
                .iter()
                .zip(&self.extents)
                .all(|(&x, &extent)| x >= 0 && x < extent as i32)
    }

    /// Map a coordinate to its flat index, or `None` when any component is
    /// out of range (or the axis count is wrong).
    pub fn flat_index(&self, coord: &[i32]) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(
            coord
                .iter()
                .zip(&self.strides)
                .map(|(&x, &stride)| x as usize * stride)
                .sum(),
        )
    }

    /// Map a coordinate to its flat index, reporting out-of-range access.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CoordOutOfBounds`] when `coord` has the wrong
    /// axis count or any component outside `[0, extent)`.
    pub fn checked_index(&self, coord: &[i32]) -> Result<usize, GridError> {
        self.flat_index(coord).ok_or_else(|| {
            let bounds = if coord.len() != self.ndim() {
                format!("expected {} axes, got {}", self.ndim(), coord.len())
            } else {
                let ranges: Vec<String> =
                    self.extents.iter().map(|e| format!("[0, {e})")).collect();
                ranges.join(" x ")
            };
            GridError::CoordOutOfBounds {
                coord: SmallVec::from_slice(coord),
                bounds,
            }
        })
    }

    /// The coordinate of a flat index. Inverse of [`Self::flat_index`] for
    /// indices in `[0, cell_count)`.
    pub fn coord_of(&self, mut index: usize) -> Coord {
        let mut coord: Coord = SmallVec::from_elem(0, self.ndim());
        for axis in 0..self.ndim() {
            coord[axis] = (index / self.strides[axis]) as i32;
            index %= self.strides[axis];
        }
        coord
    }

    /// Iterate over all cells in row-major order (last axis fastest).
    ///
    /// The n-th yielded coordinate has flat index n.
    pub fn cells(&self) -> CellIter<'_> {
        CellIter {
            lattice: self,
            next: 0,
        }
    }
}

/// Row-major iterator over lattice cells, yielded as [`Coord`]s.
#[derive(Debug)]
pub struct CellIter<'a> {
    lattice: &'a Lattice,
    next: usize,
}

impl Iterator for CellIter<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.lattice.cell_count() {
            return None;
        }
        let coord = self.lattice.coord_of(self.next);
        self.next += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.lattice.cell_count() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use smallvec::smallvec;

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_rejects_empty_shape() {
        assert!(matches!(Lattice::new(&[]), Err(GridError::EmptyShape)));
    }

    #[test]
    fn new_rejects_four_axes() {
        let result = Lattice::new(&[2, 2, 2, 2]);
        assert!(matches!(
            result,
            Err(GridError::TooManyAxes { ndim: 4, max: 3 })
        ));
    }

    #[test]
    fn new_rejects_zero_extent() {
        let result = Lattice::new(&[3, 0, 2]);
        assert!(matches!(result, Err(GridError::ZeroExtent { axis: 1 })));
    }

    #[test]
    fn new_rejects_extent_exceeding_i32_max() {
        let result = Lattice::new(&[i32::MAX as u32 + 1]);
        assert!(matches!(result, Err(GridError::ExtentTooLarge { .. })));
        // i32::MAX itself is accepted.
        assert!(Lattice::new(&[i32::MAX as u32]).is_ok());
    }

    #[test]
    fn new_rejects_cell_count_overflow() {
        let result = Lattice::new(&[i32::MAX as u32, i32::MAX as u32, i32::MAX as u32]);
        assert!(matches!(result, Err(GridError::TooManyCells)));
    }

    // ── Flattening tests ────────────────────────────────────────

    #[test]
    fn strides_1d() {
        let lat = Lattice::new(&[7]).unwrap();
        assert_eq!(lat.strides(), &[1]);
        assert_eq!(lat.flat_index(&[4]), Some(4));
    }

    #[test]
    fn strides_2d_row_major() {
        let lat = Lattice::new(&[4, 3]).unwrap();
        assert_eq!(lat.strides(), &[3, 1]);
        assert_eq!(lat.flat_index(&[0, 0]), Some(0));
        assert_eq!(lat.flat_index(&[2, 1]), Some(7));
        assert_eq!(lat.flat_index(&[3, 2]), Some(11));
    }

    #[test]
    fn strides_3d_last_axis_fastest() {
        let lat = Lattice::new(&[2, 3, 4]).unwrap();
        assert_eq!(lat.strides(), &[12, 4, 1]);
        assert_eq!(lat.flat_index(&[1, 2, 3]), Some(23));
        assert_eq!(lat.flat_index(&[0, 0, 1]), Some(1));
    }

    #[test]
    fn flat_index_out_of_range_is_none() {
        let lat = Lattice::new(&[5]).unwrap();
        assert_eq!(lat.flat_index(&[-1]), None);
        assert_eq!(lat.flat_index(&[5]), None);
        assert_eq!(lat.flat_index(&[0, 0]), None);
    }

    #[test]
    fn checked_index_reports_bounds() {
        let lat = Lattice::new(&[4, 3]).unwrap();
        let err = lat.checked_index(&[4, 0]).unwrap_err();
        match err {
            GridError::CoordOutOfBounds { coord, bounds } => {
                let expected: Coord = smallvec![4, 0];
                assert_eq!(coord, expected);
                assert_eq!(bounds, "[0, 4) x [0, 3)");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn checked_index_reports_axis_mismatch() {
        let lat = Lattice::new(&[4, 3]).unwrap();
        let err = lat.checked_index(&[1]).unwrap_err();
        match err {
            GridError::CoordOutOfBounds { bounds, .. } => {
                assert_eq!(bounds, "expected 2 axes, got 1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // ── Iteration tests ─────────────────────────────────────────

    #[test]
    fn cells_row_major_order_2d() {
        let lat = Lattice::new(&[2, 2]).unwrap();
        let cells: Vec<Coord> = lat.cells().collect();
        let expected: Vec<Coord> = vec![
            smallvec![0, 0],
            smallvec![0, 1],
            smallvec![1, 0],
            smallvec![1, 1],
        ];
        assert_eq!(cells, expected);
    }

    #[test]
    fn cells_is_exact_size() {
        let lat = Lattice::new(&[3, 2, 2]).unwrap();
        let mut iter = lat.cells();
        assert_eq!(iter.len(), 12);
        iter.next();
        assert_eq!(iter.len(), 11);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_extents() -> impl Strategy<Value = Vec<u32>> {
        prop::collection::vec(1u32..12, 1..=3)
    }

    proptest! {
        #[test]
        fn flatten_round_trips(extents in arb_extents()) {
            let lat = Lattice::new(&extents).unwrap();
            for (n, coord) in lat.cells().enumerate() {
                prop_assert_eq!(lat.flat_index(&coord), Some(n));
                prop_assert_eq!(lat.coord_of(n), coord);
            }
        }

        #[test]
        fn cell_count_matches_iteration(extents in arb_extents()) {
            let lat = Lattice::new(&extents).unwrap();
            prop_assert_eq!(lat.cells().count(), lat.cell_count());
        }

        #[test]
        fn contains_agrees_with_flat_index(
            extents in arb_extents(),
            coord in prop::collection::vec(-2i32..14, 1..=3),
        ) {
            let lat = Lattice::new(&extents).unwrap();
            prop_assert_eq!(lat.contains(&coord), lat.flat_index(&coord).is_some());
        }
    }
}
