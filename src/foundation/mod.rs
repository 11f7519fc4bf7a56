//! Shared geometry types and the error taxonomy.

/// Geometry re-exports and complex-style helpers.
pub mod core;
/// Crate-wide error type.
pub mod error;
