use koch_engine::coords::Vec2;

/// Pointer events routed through the widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer position this frame (sent every frame while inside the window).
    Hover { pos: Vec2 },
    /// Primary button went down at `pos`.
    Press { pos: Vec2 },
    /// Pointer moved while the primary button is held.
    /// `start` is where the press happened.
    Drag { pos: Vec2, start: Vec2 },
    /// Primary button released after a press at `start`.
    ///
    /// Fires even when `pos` is outside the widget; check `rect.contains(start)`
    /// to decide whether the drag belongs to you.
    DragEnd { pos: Vec2, start: Vec2 },
    /// Wheel movement in lines over `pos` (positive = up / away from the user).
    ScrollWheel { pos: Vec2, lines: f32 },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Handled; stop routing to siblings.
    Consumed,
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
