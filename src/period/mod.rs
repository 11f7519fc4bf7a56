//! Exact rational closure arithmetic.
//!
//! Every stage reports how many of its own cycles fit into one reference unit of time as a
//! [`Ratio`]. The pipeline period is the rational LCM of all of them, computed without ever
//! touching floating point.

/// Pipeline period computation (rational LCM).
pub mod engine;
/// Reduced rational numbers with bounded-denominator approximation.
pub mod ratio;
