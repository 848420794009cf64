use crate::depth::Depth;
use crate::generator::{BASE_TRIANGLE, generate};
use crate::point::Point2;

/// Result of [`KochCurve::recompute`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CurveUpdate {
    /// Requested and realized depth already matched; nothing changed.
    Unchanged,
    /// The point sequence was rebuilt and the version bumped.
    Rebuilt,
}

impl CurveUpdate {
    #[inline]
    pub fn is_rebuilt(self) -> bool {
        self == CurveUpdate::Rebuilt
    }
}

/// Koch outline cached for one depth.
///
/// Two depths are tracked: `requested` (set freely, e.g. from a slider) and
/// `realized` (the depth `points` was built for). [`recompute`](Self::recompute)
/// brings them back in line. Points, realized depth and version are always
/// replaced together.
#[derive(Debug, Clone)]
pub struct KochCurve {
    requested: Depth,
    realized: Depth,
    points: Vec<Point2>,
    version: u64,
}

impl KochCurve {
    /// Creates a curve that will build `depth` on the first `recompute`.
    ///
    /// Until then the sequence is the base triangle at realized depth 0.
    pub fn new(depth: Depth) -> Self {
        Self {
            requested: depth,
            realized: Depth::MIN,
            points: BASE_TRIANGLE.to_vec(),
            version: 0,
        }
    }

    /// Stores a new requested depth, clamped into `[0, 10]`. Does not rebuild.
    #[inline]
    pub fn set_requested_depth(&mut self, n: i64) {
        self.requested = Depth::clamped(n);
    }

    #[inline]
    pub fn requested_depth(&self) -> Depth {
        self.requested
    }

    #[inline]
    pub fn realized_depth(&self) -> Depth {
        self.realized
    }

    /// True when the next `recompute` will rebuild.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.requested != self.realized
    }

    /// Rebuilds the sequence if the requested depth changed since the last build.
    pub fn recompute(&mut self) -> CurveUpdate {
        if !self.is_dirty() {
            return CurveUpdate::Unchanged;
        }

        let points = generate(self.requested);
        log::debug!(
            "koch curve rebuilt: depth {} -> {}, {} points",
            self.realized,
            self.requested,
            points.len()
        );

        self.realized = self.requested;
        self.points = points;
        self.version = self.version.wrapping_add(1);

        CurveUpdate::Rebuilt
    }

    /// Current closed outline, first base corner first.
    #[inline]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Incremented on every rebuild. Consumers re-upload when it changes.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl Default for KochCurve {
    fn default() -> Self {
        Self::new(Depth::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_curve_holds_base_triangle() {
        let curve = KochCurve::new(Depth::clamped(4));
        assert_eq!(curve.points(), &BASE_TRIANGLE);
        assert_eq!(curve.realized_depth(), Depth::MIN);
        assert_eq!(curve.version(), 0);
        assert!(curve.is_dirty());
    }

    #[test]
    fn depth_zero_needs_no_rebuild() {
        let mut curve = KochCurve::new(Depth::MIN);
        assert!(!curve.is_dirty());
        assert_eq!(curve.recompute(), CurveUpdate::Unchanged);
        assert_eq!(curve.version(), 0);
    }

    #[test]
    fn setter_clamps_and_defers() {
        let mut curve = KochCurve::default();
        curve.set_requested_depth(42);
        assert_eq!(curve.requested_depth(), Depth::MAX);
        assert_eq!(curve.realized_depth(), Depth::MIN);
        assert_eq!(curve.points().len(), 3);

        curve.set_requested_depth(-7);
        assert_eq!(curve.requested_depth(), Depth::MIN);
        assert!(!curve.is_dirty());
    }

    #[test]
    fn rebuild_bumps_version_once() {
        let mut curve = KochCurve::default();
        curve.set_requested_depth(1);
        assert!(curve.recompute().is_rebuilt());
        assert_eq!(curve.version(), 1);
        assert_eq!(curve.realized_depth().get(), 1);
        assert_eq!(curve.points().len(), 12);

        assert_eq!(curve.recompute(), CurveUpdate::Unchanged);
        assert_eq!(curve.version(), 1);
    }

    #[test]
    fn setting_same_depth_is_not_a_change() {
        let mut curve = KochCurve::default();
        curve.set_requested_depth(3);
        curve.recompute();
        let v = curve.version();

        curve.set_requested_depth(3);
        assert_eq!(curve.recompute(), CurveUpdate::Unchanged);
        assert_eq!(curve.version(), v);
    }
}
