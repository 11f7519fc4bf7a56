pub use kurbo::{Affine, Point, Rect, Vec2};

/// Point at `radius` along the unit direction `angle_rad`, i.e. `radius * e^{i*angle}`.
#[inline]
pub fn polar(radius: f64, angle_rad: f64) -> Vec2 {
    Vec2::from_angle(angle_rad) * radius
}

/// Rotate `p` around `center` by `angle_rad` (complex multiplication by `e^{i*angle}`).
#[inline]
pub fn rotate_about(p: Point, center: Point, angle_rad: f64) -> Point {
    Affine::rotate_about(angle_rad, center) * p
}

/// Linear interpolation `a + t * (b - a)` without clamping.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
