#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the folio-solver crate.
//! [folio_core]: https://docs.rs/folio_core/latest/folio_core/index.html
//! [folio_solver]: https://docs.rs/folio_solver/latest/folio_solver/index.html
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/**
 * These are implementations of the allocation optimizer.
 */
mod impls;
pub use impls::*;

mod error;
pub use error::AllocationError;

/// Export the allocation program to standard solver formats
pub mod export;

/// Serde-friendly wrappers for reading constraint tables and writing outcomes
#[cfg(feature = "io")]
pub mod io;

// We use non-std collections here for their ordering semantics and performance
pub(crate) type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
