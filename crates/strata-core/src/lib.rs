//! Core types for the Strata deck processor.
//!
//! This is the leaf crate with zero dependencies. It defines the
//! keyword descriptor handed to property containers, the post-processing
//! hook applied after default materialization, and the ordered diagnostic
//! log drained by the reporting layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod keyword;
pub mod message;

pub use keyword::{PostProcessor, SupportedKeyword};
pub use message::{Message, MessageLog, Severity};
