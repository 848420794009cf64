use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let (x, w) = if self.size.x < 0.0 {
            (self.origin.x + self.size.x, -self.size.x)
        } else {
            (self.origin.x, self.size.x)
        };
        let (y, h) = if self.size.y < 0.0 {
            (self.origin.y + self.size.y, -self.size.y)
        } else {
            (self.origin.y, self.size.y)
        };
        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x < max.x && p.y < max.y
    }

    /// Moves every edge inward by `by`. Never produces a negative size.
    #[inline]
    pub fn shrink(self, by: f32) -> Self {
        Rect::new(
            self.origin.x + by,
            self.origin.y + by,
            (self.size.x - 2.0 * by).max(0.0),
            (self.size.y - 2.0 * by).max(0.0),
        )
    }

    /// Splits off the top `height` pixels, returning `(top, rest)`.
    ///
    /// `height` is clamped to the rect height.
    #[inline]
    pub fn split_top(self, height: f32) -> (Rect, Rect) {
        let h = height.clamp(0.0, self.size.y.max(0.0));
        (
            Rect::new(self.origin.x, self.origin.y, self.size.x, h),
            Rect::new(self.origin.x, self.origin.y + h, self.size.x, self.size.y - h),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn normalized_flips_negative_extents() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
        assert_eq!(r(1.0, 2.0, 3.0, 4.0).normalized(), r(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn contains_is_half_open() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(9.9, 5.0)));
        assert!(!rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(-1.0, 5.0)));
    }

    #[test]
    fn shrink_never_goes_negative() {
        assert_eq!(r(0.0, 0.0, 20.0, 10.0).shrink(2.0), r(2.0, 2.0, 16.0, 6.0));
        assert!(r(0.0, 0.0, 4.0, 4.0).shrink(5.0).is_empty());
    }

    #[test]
    fn split_top_partitions_height() {
        let (top, rest) = r(5.0, 5.0, 100.0, 40.0).split_top(15.0);
        assert_eq!(top, r(5.0, 5.0, 100.0, 15.0));
        assert_eq!(rest, r(5.0, 20.0, 100.0, 25.0));

        let (top, rest) = r(0.0, 0.0, 10.0, 10.0).split_top(50.0);
        assert_eq!(top.size.y, 10.0);
        assert!(rest.is_empty());
    }

    #[test]
    fn center_and_max() {
        let rect = r(2.0, 4.0, 6.0, 8.0);
        assert_eq!(rect.center(), Vec2::new(5.0, 8.0));
        assert_eq!(rect.max(), Vec2::new(8.0, 12.0));
    }
}
