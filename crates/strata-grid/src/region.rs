//! Axis-aligned sub-volumes of a grid's cell index space.

use crate::dims::GridDims;
use crate::error::GridError;

/// An axis-aligned box of cells, used to scope copy operations.
///
/// Bounds are inclusive on both ends, per axis, and are validated against
/// the grid at construction. A region remembers the [`GridDims`] it was
/// built from; operations that consume a region expect their property
/// arrays to be sized to the same grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    dims: GridDims,
    lo: [u32; 3],
    hi: [u32; 3],
}

impl Region {
    /// Create a region from inclusive `[i, j, k]` lower and upper bounds.
    ///
    /// Fails with [`GridError::InvalidRegion`] if any lower bound exceeds
    /// its upper bound or any upper bound falls outside the extents.
    pub fn new(dims: GridDims, lo: [u32; 3], hi: [u32; 3]) -> Result<Self, GridError> {
        let extents = [dims.nx(), dims.ny(), dims.nz()];
        for axis in 0..3 {
            if lo[axis] > hi[axis] {
                return Err(GridError::InvalidRegion {
                    reason: format!(
                        "axis {axis}: lower bound {} exceeds upper bound {}",
                        lo[axis], hi[axis]
                    ),
                });
            }
            if hi[axis] >= extents[axis] {
                return Err(GridError::InvalidRegion {
                    reason: format!(
                        "axis {axis}: upper bound {} outside extent {}",
                        hi[axis], extents[axis]
                    ),
                });
            }
        }
        Ok(Self { dims, lo, hi })
    }

    /// The region covering every cell of the grid.
    pub fn all(dims: GridDims) -> Self {
        Self {
            dims,
            lo: [0, 0, 0],
            hi: [dims.nx() - 1, dims.ny() - 1, dims.nz() - 1],
        }
    }

    /// The grid this region was built against.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Inclusive lower `[i, j, k]` bounds.
    pub fn lower(&self) -> [u32; 3] {
        self.lo
    }

    /// Inclusive upper `[i, j, k]` bounds.
    pub fn upper(&self) -> [u32; 3] {
        self.hi
    }

    /// Number of cells inside the region.
    pub fn cell_count(&self) -> usize {
        (0..3)
            .map(|axis| (self.hi[axis] - self.lo[axis]) as usize + 1)
            .product()
    }

    /// Flat cell indices inside the region, in canonical (I fastest)
    /// order. The sequence is strictly increasing.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        let dims = self.dims;
        let [i0, j0, k0] = self.lo;
        let [i1, j1, k1] = self.hi;
        (k0..=k1).flat_map(move |k| {
            (j0..=j1).flat_map(move |j| (i0..=i1).map(move |i| dims.flat_index(i, j, k)))
        })
    }
}
