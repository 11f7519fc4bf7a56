//! End-to-end drawing: configuration in, SVG document out.

/// The batch run and its statistics.
pub mod drawing;
