use koch_engine::coords::{Rect, Vec2};

/// Insets on all four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

/// Size range a parent offers a child during measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Shrink max inward by `edges`. Min becomes zero.
    #[inline]
    #[must_use]
    pub fn shrink(self, edges: Edges) -> Self {
        Self {
            min: Vec2::zero(),
            max: Vec2::new(
                (self.max.x - edges.h()).max(0.0),
                (self.max.y - edges.v()).max(0.0),
            ),
        }
    }
}

/// Shrink a rect by `edges`.
#[inline]
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    Rect::new(
        rect.origin.x + edges.left,
        rect.origin.y + edges.top,
        (rect.size.x - edges.h()).max(0.0),
        (rect.size.y - edges.v()).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_both_ends() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 300.0)), Vec2::new(10.0, 100.0));
        assert_eq!(c.constrain(Vec2::new(50.0, 60.0)), Vec2::new(50.0, 60.0));
    }

    #[test]
    fn unbounded_passes_sizes_through() {
        let out = Constraints::unbounded().constrain(Vec2::new(1e6, 3.0));
        assert_eq!(out, Vec2::new(1e6, 3.0));
    }

    #[test]
    fn shrink_removes_padding_and_min() {
        let c = Constraints::tight(Vec2::new(100.0, 40.0)).shrink(Edges::symmetric(5.0, 10.0));
        assert_eq!(c.min, Vec2::zero());
        assert_eq!(c.max, Vec2::new(80.0, 30.0));

        let tiny = Constraints::loose(Vec2::new(4.0, 4.0)).shrink(Edges::all(5.0));
        assert_eq!(tiny.max, Vec2::zero());
    }

    #[test]
    fn inset_rect_never_goes_negative() {
        let r = inset_rect(Rect::new(0.0, 0.0, 30.0, 20.0), Edges::all(4.0));
        assert_eq!(r, Rect::new(4.0, 4.0, 22.0, 12.0));
        assert!(inset_rect(Rect::new(0.0, 0.0, 6.0, 6.0), Edges::all(4.0)).is_empty());
    }
}
