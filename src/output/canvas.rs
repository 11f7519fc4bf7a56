use crate::{
    foundation::core::{Point, Rect, Vec2},
    foundation::error::{SpiroError, SpiroResult},
};

/// Target frame for the output path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSpec {
    /// Canvas width in user units.
    pub width: f64,
    /// Canvas height in user units.
    pub height: f64,
    /// Margin on each side, as a fraction of the canvas size, in `[0, 0.5)`.
    pub margin: f64,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            margin: 0.1,
        }
    }
}

impl CanvasSpec {
    /// Reject canvases that cannot hold a non-empty inset area.
    pub fn validate(&self) -> SpiroResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(SpiroError::config("output width must be finite and > 0"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(SpiroError::config("output height must be finite and > 0"));
        }
        if !(self.margin.is_finite() && (0.0..0.5).contains(&self.margin)) {
            return Err(SpiroError::config("output margin must be in [0, 0.5)"));
        }
        Ok(())
    }

    /// Size of the margin-inset drawing area.
    pub fn available(&self) -> Vec2 {
        Vec2::new(
            self.width * (1.0 - 2.0 * self.margin),
            self.height * (1.0 - 2.0 * self.margin),
        )
    }
}

/// Axis-aligned bounds of `points`, `None` when empty.
pub fn bounds(points: &[Point]) -> Option<Rect> {
    let (&first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(Rect::from_points(first, first), |r, &p| r.union_pt(p)),
    )
}

/// Uniform scale that fits `bounds` into the inset canvas. Zero-size axes count as `1`.
pub fn fit_scale(bounds: Rect, canvas: &CanvasSpec) -> f64 {
    let data_w = match bounds.width() {
        w if w == 0.0 => 1.0,
        w => w,
    };
    let data_h = match bounds.height() {
        h if h == 0.0 => 1.0,
        h => h,
    };
    let avail = canvas.available();
    (avail.x / data_w).min(avail.y / data_h)
}

/// Center, scale and flip `points` into canvas coordinates (origin top-left, Y down).
///
/// The flip `y' = height - y` is applied once, after scaling and centering.
pub fn normalize_to_canvas(points: &[Point], canvas: &CanvasSpec) -> Vec<Point> {
    let Some(b) = bounds(points) else {
        return Vec::new();
    };
    let scale = fit_scale(b, canvas);
    let center = b.center();
    let mid = Vec2::new(canvas.width / 2.0, canvas.height / 2.0);
    points
        .iter()
        .map(|&p| {
            let q = ((p - center) * scale + mid).to_point();
            Point::new(q.x, canvas.height - q.y)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/output/canvas.rs"]
mod tests;
