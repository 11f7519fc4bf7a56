use crate::foundation::core::Point;

/// Cumulative Euclidean distance at each point, starting at exactly `0`.
///
/// Non-decreasing by construction; strictly increasing wherever consecutive points differ.
pub fn arc_length_table(points: &[Point]) -> Vec<f64> {
    let mut table = Vec::with_capacity(points.len());
    let Some(&first) = points.first() else {
        return table;
    };
    let mut acc = 0.0;
    let mut prev = first;
    table.push(acc);
    for &p in &points[1..] {
        acc += (p - prev).hypot();
        table.push(acc);
        prev = p;
    }
    table
}

/// Total polyline length (last arc-length table entry).
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).hypot()).sum()
}

/// Resample `points` at `count` arc-length positions evenly spaced over `[0, L)`.
///
/// Coordinates are linearly interpolated against the arc-length table, so fast sections of the
/// curve no longer get more points than slow ones. A zero-length input maps every output point
/// to the first input point.
pub fn resample_by_arc_length(points: &[Point], count: usize) -> Vec<Point> {
    if points.is_empty() || count == 0 {
        return Vec::new();
    }
    let table = arc_length_table(points);
    let total = table[table.len() - 1];
    if total <= 0.0 {
        return vec![points[0]; count];
    }

    let step = total / count as f64;
    (0..count)
        .map(|k| interpolate(points, &table, k as f64 * step))
        .collect()
}

/// Pick `count` points at evenly spaced indices, first and last included.
///
/// Uniform in time rather than in space: this does not correct point density.
pub fn subsample_uniform(points: &[Point], count: usize) -> Vec<Point> {
    if points.is_empty() || count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![points[0]];
    }
    let last = points.len() - 1;
    (0..count)
        .map(|i| points[i * last / (count - 1)])
        .collect()
}

fn interpolate(points: &[Point], table: &[f64], target: f64) -> Point {
    // First entry strictly beyond the target; the segment starts one before it.
    let hi = table.partition_point(|&s| s <= target);
    if hi == 0 {
        return points[0];
    }
    if hi >= table.len() {
        return points[points.len() - 1];
    }
    let lo = hi - 1;
    let frac = (target - table[lo]) / (table[hi] - table[lo]);
    points[lo].lerp(points[hi], frac)
}

#[cfg(test)]
#[path = "../../tests/unit/sample/arc_length.rs"]
mod tests;
