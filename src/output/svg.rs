use std::fmt::Write as _;

use crate::{
    foundation::core::Point,
    foundation::error::{SpiroError, SpiroResult},
    output::canvas::CanvasSpec,
};

/// Styling carried by the output document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    /// Path stroke width in user units.
    pub stroke_width: f64,
    /// Any SVG paint value, e.g. `#000000` or `navy`.
    pub stroke_color: String,
    /// Fill of the full-canvas background rectangle.
    pub background_color: String,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            stroke_width: 0.5,
            stroke_color: "#000000".to_string(),
            background_color: "#ffffff".to_string(),
        }
    }
}

impl StrokeStyle {
    /// Colors are written into attributes verbatim, so they may not contain markup.
    pub fn validate(&self) -> SpiroResult<()> {
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(SpiroError::config("stroke_width must be finite and >= 0"));
        }
        for (key, value) in [
            ("stroke_color", &self.stroke_color),
            ("background_color", &self.background_color),
        ] {
            let v = value.trim();
            if v.is_empty() {
                return Err(SpiroError::config(format!("{key} must be non-empty")));
            }
            if v.contains(['"', '<', '>', '&']) {
                return Err(SpiroError::config(format!(
                    "{key} '{value}' contains characters not allowed in an attribute"
                )));
            }
        }
        Ok(())
    }
}

/// `M x y L x y ...` with four decimals. The path is left open.
pub fn path_data(points: &[Point]) -> String {
    let mut d = String::with_capacity(points.len() * 24);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd} {:.4} {:.4}", p.x, p.y);
    }
    d
}

/// Full SVG document: background rectangle first, then one open polyline path.
pub fn render_svg(points: &[Point], canvas: &CanvasSpec, style: &StrokeStyle) -> String {
    let (w, h) = (canvas.width, canvas.height);
    let d = path_data(points);
    let mut svg = String::with_capacity(d.len() + 512);
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    let _ = writeln!(
        svg,
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        style.background_color.trim()
    );
    let _ = writeln!(
        svg,
        "  <path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" \
         stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
        style.stroke_color.trim(),
        style.stroke_width
    );
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
#[path = "../../tests/unit/output/svg.rs"]
mod tests;
