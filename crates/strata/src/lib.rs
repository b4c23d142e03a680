//! Strata: grid property management for reservoir-simulation input decks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // A 2x1x1 grid and the keywords this model supports.
//! let dims = GridDims::new(2, 1, 1).unwrap();
//! let mut registry = PropertyRegistry::new(
//!     &dims,
//!     vec![
//!         SupportedKeyword::new("PORO", 0.2_f64, "1"),
//!         SupportedKeyword::new("PERMX", 100.0_f64, "Permeability"),
//!     ],
//! );
//!
//! // A read materializes the keyword with defaults.
//! assert_eq!(registry.get_or_default("PORO").unwrap().values(), &[0.2, 0.2]);
//! assert!(!registry.has("PORO"));
//!
//! // The explicit deck mention promotes it and logs a warning.
//! assert_eq!(registry.add("PORO"), Ok(true));
//! assert!(registry.has("PORO"));
//! assert_eq!(registry.messages().len(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Keyword descriptors, post-processing, diagnostics |
//! | [`grid`] | `strata-grid` | Grid extents and region sub-volumes |
//! | [`props`] | `strata-props` | Property store, catalog, registry, case assembly |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Keyword descriptors, post-processing, and diagnostics (`strata-core`).
pub use strata_core as types;

/// Grid extents and region sub-volumes (`strata-grid`).
pub use strata_grid as grid;

/// Property store, keyword catalog, registry, and case assembly
/// (`strata-props`).
pub use strata_props as props;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    pub use strata_core::{Message, MessageLog, PostProcessor, Severity, SupportedKeyword};
    pub use strata_grid::{GridDims, GridError, Region};
    pub use strata_props::{
        CaseProperties, CellProperty, KeywordCatalog, Origin, PropertyError, PropertyRegistry,
    };
}
