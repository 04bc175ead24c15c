#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the folio-core crate.
//! [folio_core]: https://docs.rs/folio_core/latest/folio_core/index.html
//! [folio_solver]: https://docs.rs/folio_solver/latest/folio_solver/index.html
//! [folio_sqlite]: https://docs.rs/folio_sqlite/latest/folio_sqlite/index.html
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for portfolio allocation.
///
/// The models are value types with minimal business logic: a constraint validates
/// itself on construction and is immutable afterwards, and a result is a plain
/// record produced by an optimizer.
pub mod models;

/// Deterministic color assignment for rendering an allocation.
pub mod palette;

/// Interface traits for the allocation system.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the domain and external adapters
/// (solvers, databases) without specifying implementation details, so that the
/// infrastructure can be swapped out without touching the models.
pub mod ports;
