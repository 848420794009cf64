use koch_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

struct StackItem {
    offset: Vec2,
    element: Element,
}

/// Overlay container placing each child at a fixed offset from its own origin.
///
/// Children take their natural size. They paint in insertion order and
/// receive events in reverse order, so the topmost child is hit first.
#[derive(Default)]
pub struct Stack {
    children: Vec<StackItem>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(mut self, x: f32, y: f32, child: impl Into<Element>) -> Self {
        self.children.push(StackItem { offset: Vec2::new(x, y), element: child.into() });
        self
    }

    /// Adds `child` only when `cond` holds.
    pub fn place_if(self, cond: bool, x: f32, y: f32, child: impl FnOnce() -> Element) -> Self {
        if cond { self.place(x, y, child()) } else { self }
    }

    fn child_rect(item: &StackItem, parent: Rect) -> Rect {
        let origin = parent.origin + item.offset;
        let room = Vec2::new(
            (parent.size.x - item.offset.x).max(0.0),
            (parent.size.y - item.offset.y).max(0.0),
        );
        let size = item.element.measure(Constraints::loose(room));
        Rect::from_origin_size(origin, size)
    }
}

impl Widget for Stack {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { 0.0 };
        let h = if constraints.max.y.is_finite() { constraints.max.y } else { 0.0 };
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        for item in &self.children {
            item.element.paint(painter, Self::child_rect(item, rect));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        for item in self.children.iter_mut().rev() {
            let child = Self::child_rect(item, rect);
            if item.element.on_event(event, child).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}
