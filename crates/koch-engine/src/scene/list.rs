use crate::coords::Rect;
use crate::paint::Color;

use super::{DrawCmd, RectCmd};

/// Recorded draw stream for a frame.
///
/// Items are painted in insertion order, so later pushes land on top.
/// `clear()` keeps the allocation for the next frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in paint order (back to front).
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records a solid rectangle. Empty rects are dropped.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect.normalized();
        if rect.is_empty() || color.a <= 0.0 {
            return;
        }
        self.push(DrawCmd::Rect(RectCmd::new(rect, color)));
    }

    /// Records a `width`-pixel outline just inside `rect` as four rects.
    pub fn push_rect_outline(&mut self, rect: Rect, width: f32, color: Color) {
        let r = rect.normalized();
        let w = width.min(r.size.x * 0.5).min(r.size.y * 0.5);
        if w <= 0.0 {
            return;
        }
        let (x, y, rw, rh) = (r.origin.x, r.origin.y, r.size.x, r.size.y);
        self.push_rect(Rect::new(x, y, rw, w), color);
        self.push_rect(Rect::new(x, y + rh - w, rw, w), color);
        self.push_rect(Rect::new(x, y + w, w, rh - 2.0 * w), color);
        self.push_rect(Rect::new(x + rw - w, y + w, w, rh - 2.0 * w), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Color { Color::from_straight(1.0, 1.0, 1.0, 1.0) }

    #[test]
    fn keeps_insertion_order() {
        let mut dl = DrawList::new();
        dl.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0), white());
        dl.push_rect(Rect::new(5.0, 5.0, 1.0, 1.0), white());
        let DrawCmd::Rect(first) = &dl.items()[0];
        assert_eq!(first.rect.origin.x, 0.0);
        let DrawCmd::Rect(second) = &dl.items()[1];
        assert_eq!(second.rect.origin.x, 5.0);
    }

    #[test]
    fn drops_empty_and_invisible_rects() {
        let mut dl = DrawList::new();
        dl.push_rect(Rect::new(0.0, 0.0, 0.0, 10.0), white());
        dl.push_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::transparent());
        assert!(dl.is_empty());
    }

    #[test]
    fn normalizes_negative_rects() {
        let mut dl = DrawList::new();
        dl.push_rect(Rect::new(10.0, 10.0, -5.0, -5.0), white());
        let DrawCmd::Rect(cmd) = &dl.items()[0];
        assert_eq!(cmd.rect, Rect::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn outline_is_four_strips_inside_the_rect() {
        let mut dl = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 20.0, 10.0);
        dl.push_rect_outline(rect, 1.0, white());
        assert_eq!(dl.len(), 4);
        for item in dl.items() {
            let DrawCmd::Rect(cmd) = item;
            assert!(cmd.rect.origin.x >= 0.0 && cmd.rect.max().x <= 20.0);
            assert!(cmd.rect.origin.y >= 0.0 && cmd.rect.max().y <= 10.0);
        }
    }

    #[test]
    fn clear_empties_the_list() {
        let mut dl = DrawList::new();
        dl.push_rect(Rect::new(0.0, 0.0, 2.0, 2.0), white());
        dl.clear();
        assert!(dl.is_empty());
    }
}
