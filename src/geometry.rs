//! Scalar interpolation helpers and the nearest-point scan.

use glam::DVec2;

/// Linear interpolation: `a + (b - a) * t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: `t = (v - a) / (b - a)`.
///
/// Degenerate ranges (`a == b`) divide by zero and yield infinity or NaN;
/// callers that cannot tolerate garbage coordinates must guard the range.
pub fn inv_lerp(a: f64, b: f64, v: f64) -> f64 {
    (v - a) / (b - a)
}

/// Map `v` from the range `[a0, b0]` into `[a1, b1]`.
///
/// Linear and unclamped: values outside `[a0, b0]` extrapolate.
pub fn remap(a0: f64, b0: f64, a1: f64, b1: f64, v: f64) -> f64 {
    lerp(a1, b1, inv_lerp(a0, b0, v))
}

/// Index of the point nearest to `loc`, or `None` for an empty slice.
///
/// Linear scan; ties keep the lowest index.
pub fn nearest_index(loc: DVec2, points: &[DVec2]) -> Option<usize> {
    let mut min_dist = f64::INFINITY;
    let mut nearest = None;
    for (i, point) in points.iter().enumerate() {
        let dist = loc.distance(*point);
        if dist < min_dist {
            min_dist = dist;
            nearest = Some(i);
        }
    }
    nearest
}

/// Fixed-decimal formatting for axis value labels.
pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn test_remap_extrapolates() {
        assert_eq!(remap(0.0, 10.0, 0.0, 100.0, 5.0), 50.0);
        // Unclamped on both sides
        assert_eq!(remap(0.0, 10.0, 0.0, 100.0, -5.0), -50.0);
        assert_eq!(remap(0.0, 10.0, 0.0, 100.0, 15.0), 150.0);
    }

    #[test]
    fn test_remap_inverted_target() {
        // Target range runs high-to-low, like a pixel y axis
        assert_eq!(remap(0.0, 10.0, 100.0, 0.0, 2.5), 75.0);
    }

    #[test]
    fn test_inv_lerp_degenerate_range() {
        let t = inv_lerp(5.0, 5.0, 7.0);
        assert!(t.is_infinite() || t.is_nan());
    }

    #[test]
    fn test_nearest_index_ties_keep_lowest() {
        let points = vec![
            DVec2::new(1.0, 0.0),
            DVec2::new(-1.0, 0.0),
            DVec2::new(0.0, 1.0),
        ];
        assert_eq!(nearest_index(DVec2::ZERO, &points), Some(0));
        assert_eq!(nearest_index(DVec2::ZERO, &[]), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.14159, 2), "3.14");
        assert_eq!(format_number(12.0, 2), "12.00");
    }
}
