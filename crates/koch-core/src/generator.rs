//! Recursive Koch subdivision.
//!
//! Output order matters: the sequence is drawn as a closed line loop, so each
//! interior point is appended right after the sub-edge leading into it has
//! been fully expanded.

use crate::depth::Depth;
use crate::point::Point2;

/// Corners of the base shape, counter-clockwise.
pub const BASE_TRIANGLE: [Point2; 3] = [
    Point2::new(-0.5, -0.5),
    Point2::new(0.5, -0.5),
    Point2::new(0.0, 0.5),
];

/// Number of points `generate(depth)` produces: `3 * 4^depth`.
///
/// Each base edge contributes its start corner plus `4^depth - 1` interior points.
#[inline]
pub fn point_count(depth: Depth) -> usize {
    3 * 4usize.pow(depth.get())
}

/// Builds the full closed outline for `depth`.
pub fn generate(depth: Depth) -> Vec<Point2> {
    let mut out = Vec::with_capacity(point_count(depth));
    for (i, &start) in BASE_TRIANGLE.iter().enumerate() {
        let end = BASE_TRIANGLE[(i + 1) % BASE_TRIANGLE.len()];
        out.push(start);
        subdivide(start, end, 0, depth.get(), &mut out);
    }
    debug_assert_eq!(out.len(), point_count(depth));
    out
}

/// Appends the interior points of the edge `start -> end` to `out`.
///
/// Neither endpoint is emitted. Recursion stops once `level >= realized`.
fn subdivide(start: Point2, end: Point2, level: u32, realized: u32, out: &mut Vec<Point2>) {
    if level >= realized {
        return;
    }

    let d = end - start;
    let third = d / 3.0;

    let length = third.length();
    let height = 3f64.sqrt() * length * 0.5;

    // Sign fixed so bumps land outside a counter-clockwise triangle.
    let norm = Point2::new(-third.x / length, -third.y / length);
    let center = 0.5 * d + start;

    let p1 = third + start;
    let peak = Point2::new(center.x - norm.y * height, center.y + norm.x * height);
    let p2 = (2.0 / 3.0) * d + start;

    let next = level + 1;
    subdivide(start, p1, next, realized, out);
    out.push(p1);
    subdivide(p1, peak, next, realized, out);
    out.push(peak);
    subdivide(peak, p2, next, realized, out);
    out.push(p2);
    subdivide(p2, end, next, realized, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point2, b: Point2) -> bool {
        (a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12
    }

    #[test]
    fn depth_zero_is_base_triangle() {
        assert_eq!(generate(Depth::MIN), BASE_TRIANGLE.to_vec());
    }

    #[test]
    fn counts_match_formula() {
        assert_eq!(point_count(Depth::clamped(0)), 3);
        assert_eq!(point_count(Depth::clamped(1)), 12);
        assert_eq!(point_count(Depth::clamped(2)), 48);
        for n in 0..=6 {
            let d = Depth::clamped(n);
            assert_eq!(generate(d).len(), point_count(d));
        }
    }

    #[test]
    fn subdivide_below_realized_emits_nothing() {
        let mut out = Vec::new();
        subdivide(BASE_TRIANGLE[0], BASE_TRIANGLE[1], 2, 2, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn single_level_emits_three_points_in_order() {
        let mut out = Vec::new();
        subdivide(Point2::new(0.0, 0.0), Point2::new(3.0, 0.0), 0, 1, &mut out);
        assert_eq!(out.len(), 3);
        assert!(close(out[0], Point2::new(1.0, 0.0)));
        // Edge runs +X, so the bump points towards -Y.
        assert!(close(out[1], Point2::new(1.5, -(3f64.sqrt()) / 2.0)));
        assert!(close(out[2], Point2::new(2.0, 0.0)));
    }

    #[test]
    fn second_level_interleaves_with_first() {
        let mut out = Vec::new();
        subdivide(Point2::new(0.0, 0.0), Point2::new(9.0, 0.0), 0, 2, &mut out);
        assert_eq!(out.len(), 15);
        // First sub-edge (0,0)->(3,0) expands before p1 = (3,0) is emitted.
        assert!(close(out[0], Point2::new(1.0, 0.0)));
        assert!(close(out[2], Point2::new(2.0, 0.0)));
        assert!(close(out[3], Point2::new(3.0, 0.0)));
        assert!(close(out[11], Point2::new(6.0, 0.0)));
    }
}
