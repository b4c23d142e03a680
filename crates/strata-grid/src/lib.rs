//! Grid geometry consumed by the Strata property containers.
//!
//! The deck processor only needs two things from geometry: the
//! three-axis cell-count extents ([`GridDims`]) used to size property
//! arrays, and axis-aligned sub-volumes of the cell index space
//! ([`Region`]) used to scope copy operations. Everything else about the
//! grid (cell volumes, depths, pinch-outs) lives in the geometry
//! processor and never enters this workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dims;
pub mod error;
pub mod region;

pub use dims::GridDims;
pub use error::GridError;
pub use region::Region;
