//! Composition of stages into one function of time.

/// The left-to-right stage fold.
pub mod executor;
