//! Three-axis cell-count extents.

use crate::error::GridError;

/// Cell-count extents of a structured grid along the I, J and K axes.
///
/// Property arrays are sized to `cell_count()` and indexed by the flat
/// cell index with I running fastest, the canonical ordering of deck
/// files: `index = i + nx * (j + ny * k)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    nx: u32,
    ny: u32,
    nz: u32,
}

impl GridDims {
    /// Create extents, rejecting degenerate grids.
    ///
    /// Fails with [`GridError::EmptyGrid`] if any extent is zero and with
    /// [`GridError::TooManyCells`] if the extent product does not fit in
    /// the flat index space.
    pub fn new(nx: u32, ny: u32, nz: u32) -> Result<Self, GridError> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(GridError::EmptyGrid);
        }
        (nx as usize)
            .checked_mul(ny as usize)
            .and_then(|p| p.checked_mul(nz as usize))
            .ok_or(GridError::TooManyCells { nx, ny, nz })?;
        Ok(Self { nx, ny, nz })
    }

    /// X-axis extent.
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Y-axis extent.
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Z-axis extent.
    pub fn nz(&self) -> u32 {
        self.nz
    }

    /// Total number of cells (`nx * ny * nz`).
    pub fn cell_count(&self) -> usize {
        self.nx as usize * self.ny as usize * self.nz as usize
    }

    /// Flat cell index of `(i, j, k)`, I fastest.
    ///
    /// The coordinate must be within the extents; this is not checked.
    pub fn flat_index(&self, i: u32, j: u32, k: u32) -> usize {
        i as usize + self.nx as usize * (j as usize + self.ny as usize * k as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_count_is_extent_product() {
        let dims = GridDims::new(4, 3, 2).unwrap();
        assert_eq!(dims.cell_count(), 24);
        assert_eq!((dims.nx(), dims.ny(), dims.nz()), (4, 3, 2));
    }

    #[test]
    fn flat_index_runs_i_fastest() {
        let dims = GridDims::new(2, 3, 2).unwrap();
        assert_eq!(dims.flat_index(0, 0, 0), 0);
        assert_eq!(dims.flat_index(1, 0, 0), 1);
        assert_eq!(dims.flat_index(0, 1, 0), 2);
        assert_eq!(dims.flat_index(0, 0, 1), 6);
        assert_eq!(dims.flat_index(1, 2, 1), 11);
    }

    #[test]
    fn zero_extent_is_rejected() {
        assert_eq!(GridDims::new(0, 3, 2), Err(GridError::EmptyGrid));
        assert_eq!(GridDims::new(3, 0, 2), Err(GridError::EmptyGrid));
        assert_eq!(GridDims::new(3, 2, 0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn extent_overflow_is_rejected() {
        let result = GridDims::new(u32::MAX, u32::MAX, u32::MAX);
        assert!(matches!(result, Err(GridError::TooManyCells { .. })));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn flat_index_is_bijective_over_the_grid(
                nx in 1u32..8,
                ny in 1u32..8,
                nz in 1u32..8,
            ) {
                let dims = GridDims::new(nx, ny, nz).unwrap();
                let mut seen = vec![false; dims.cell_count()];
                for k in 0..nz {
                    for j in 0..ny {
                        for i in 0..nx {
                            let idx = dims.flat_index(i, j, k);
                            prop_assert!(idx < dims.cell_count());
                            prop_assert!(!seen[idx], "index {idx} produced twice");
                            seen[idx] = true;
                        }
                    }
                }
                prop_assert!(seen.iter().all(|&v| v));
            }
        }
    }
}
