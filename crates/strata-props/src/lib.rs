//! Lazily-populated registry of per-cell grid properties, keyed by
//! keyword name.
//!
//! This crate is the heart of the Strata deck processor. A
//! [`PropertyRegistry`] answers, for every keyword in its catalog,
//! whether a dense per-cell property already has explicit values, has
//! been synthesized with defaults, or does not exist yet, and manages
//! the one legal provenance transition (implicitly defaulted to
//! explicitly specified) with a diagnostic when it happens.
//!
//! Usage mirrors deck consumption:
//!
//! 1. Build the registry with the grid extents and the supported
//!    keywords for the simulation model.
//! 2. Query it with [`PropertyRegistry::supports`] and
//!    [`PropertyRegistry::has`].
//! 3. Read through [`PropertyRegistry::get_or_default`]; a supported but
//!    missing keyword is materialized with catalog defaults on the spot.
//! 4. Record explicit deck mentions with [`PropertyRegistry::add`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod case;
pub mod catalog;
pub mod error;
pub mod property;
pub mod registry;

pub use case::CaseProperties;
pub use catalog::KeywordCatalog;
pub use error::PropertyError;
pub use property::CellProperty;
pub use registry::{Origin, PropertyRegistry};
