use koch_engine::coords::{Rect, Vec2};
use koch_engine::paint::Color;
use koch_engine::scene::DrawList;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine `DrawList` and exposes the frame's pointer state so
/// widgets can draw hover and pressed visuals directly.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    /// Pointer position in logical pixels, `None` while outside the window.
    pub mouse_pos: Option<Vec2>,
    /// True while the primary button is held down.
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, mouse_pos: Option<Vec2>, mouse_pressed: bool) -> Self {
        Self { draw_list, mouse_pos, mouse_pressed }
    }

    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.mouse_pos.is_some_and(|p| rect.contains(p))
    }

    #[inline]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && self.is_hovered(rect)
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_rect(rect, color);
    }

    /// Outline drawn inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        self.draw_list.push_rect_outline(rect, width, color);
    }
}
