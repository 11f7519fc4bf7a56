//! Fitting the output path to a canvas and writing it as SVG.

/// Bounding box, uniform scaling and Y flip.
pub mod canvas;
/// Open-polyline SVG document writer.
pub mod svg;
