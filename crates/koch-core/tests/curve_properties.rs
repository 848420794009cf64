use koch_core::{BASE_TRIANGLE, CurveUpdate, Depth, KochCurve, Point2, generate, point_count};

fn build(n: i64) -> KochCurve {
    let mut curve = KochCurve::default();
    curve.set_requested_depth(n);
    curve.recompute();
    curve
}

#[test]
fn recompute_is_idempotent_for_every_depth() {
    for n in 0..=10 {
        let mut curve = build(n);
        assert_eq!(curve.realized_depth().get(), n as u32);

        let version = curve.version();
        let before = curve.points().to_vec();
        assert_eq!(curve.recompute(), CurveUpdate::Unchanged);
        assert_eq!(curve.version(), version);
        assert_eq!(curve.points(), before.as_slice());
    }
}

#[test]
fn out_of_range_requests_clamp_to_bounds() {
    let mut curve = KochCurve::default();
    curve.set_requested_depth(-1);
    assert_eq!(curve.requested_depth(), Depth::MIN);
    curve.set_requested_depth(11);
    assert_eq!(curve.requested_depth(), Depth::MAX);
}

#[test]
fn point_counts_per_depth() {
    assert_eq!(build(0).points().len(), 3);
    assert_eq!(build(1).points().len(), 12);
    assert_eq!(build(2).points().len(), 48);
    for n in 1..=7u32 {
        let expected = 3 + 3 * (4usize.pow(n) - 1);
        assert_eq!(build(n as i64).points().len(), expected);
    }
}

#[test]
fn deepest_curve_has_expected_size() {
    assert_eq!(point_count(Depth::MAX), 3_145_728);
}

#[test]
fn points_stay_near_the_base_triangle() {
    const MARGIN: f64 = 0.35;
    for n in 0..=7 {
        for p in generate(Depth::clamped(n)) {
            assert!(p.is_finite());
            assert!(p.x >= -0.5 - MARGIN && p.x <= 0.5 + MARGIN, "{p:?} at depth {n}");
            assert!(p.y >= -0.5 - MARGIN && p.y <= 0.5 + MARGIN, "{p:?} at depth {n}");
        }
    }
}

#[test]
fn closed_loop_has_no_repeated_neighbours() {
    for n in 0..=7 {
        let pts = generate(Depth::clamped(n));
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            assert!((b - a).length() > 0.0, "duplicate at {i} for depth {n}");
        }
    }
}

#[test]
fn returning_to_zero_restores_the_base_sequence_exactly() {
    let mut curve = KochCurve::default();
    let initial: Vec<Point2> = curve.points().to_vec();

    curve.set_requested_depth(3);
    assert!(curve.recompute().is_rebuilt());
    assert_eq!(curve.points().len(), 192);

    curve.set_requested_depth(0);
    assert!(curve.recompute().is_rebuilt());
    assert_eq!(curve.points(), initial.as_slice());
    for (a, b) in curve.points().iter().zip(BASE_TRIANGLE.iter()) {
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }
}

#[test]
fn depth_one_bottom_edge_matches_construction() {
    let pts = build(1).points().to_vec();
    let eps = 1e-12;

    assert_eq!(pts[0], Point2::new(-0.5, -0.5));

    let p1 = pts[1];
    assert!((p1.x - (-0.5 + 1.0 / 3.0)).abs() < eps);
    assert!((p1.y - -0.5).abs() < eps);

    let peak = pts[2];
    let height = 3f64.sqrt() * (1.0 / 3.0) * 0.5;
    assert!(peak.x.abs() < eps);
    assert!((peak.y - (-0.5 - height)).abs() < eps);

    let p2 = pts[3];
    assert!((p2.x - (-0.5 + 2.0 / 3.0)).abs() < eps);
    assert!((p2.y - -0.5).abs() < eps);

    // Next edge starts at the second base corner.
    assert_eq!(pts[4], Point2::new(0.5, -0.5));
    assert_eq!(pts[8], Point2::new(0.0, 0.5));
}

#[test]
fn every_bump_points_away_from_the_centroid() {
    let centroid = Point2::new(0.0, -1.0 / 6.0);
    let pts = build(1).points().to_vec();
    for edge in 0..3 {
        let start = pts[edge * 4];
        let end = pts[(edge * 4 + 4) % pts.len()];
        let peak = pts[edge * 4 + 2];
        let mid = 0.5 * (end - start) + start;
        assert!((peak - centroid).length() > (mid - centroid).length());
    }
}
