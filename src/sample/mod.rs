//! Turning the composed pipeline into point sequences.

/// Arc-length table and reparameterization.
pub mod arc_length;
/// Uniform-in-time sampling over one pipeline period.
pub mod dense;
