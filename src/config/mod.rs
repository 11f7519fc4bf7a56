//! JSON drawing configuration: the pipeline, its stage sections and run parameters.

/// Boundary model, loading and validation.
pub mod model;
