use koch_engine::coords::{Rect, Vec2};
use koch_engine::paint::Color;

use crate::constraints::{Constraints, Edges, inset_rect};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Floating window: a title strip above a padded column of children.
///
/// Presses anywhere on the panel are consumed so they never fall through to
/// whatever is drawn behind it.
pub struct Panel {
    children: Vec<Element>,
    width: f32,
    padding: Edges,
    spacing: f32,
    title_height: f32,
    background: Color,
    title_color: Color,
    border_color: Color,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            width: 220.0,
            padding: Edges::all(8.0),
            spacing: 6.0,
            title_height: 8.0,
            background: Color::from_straight(0.06, 0.06, 0.08, 0.86),
            title_color: Color::from_straight(0.16, 0.29, 0.48, 1.0),
            border_color: Color::from_straight(0.43, 0.43, 0.50, 0.5),
        }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn width(mut self, v: f32) -> Self { self.width = v; self }
    pub fn padding(mut self, v: Edges) -> Self { self.padding = v; self }
    pub fn spacing(mut self, v: f32) -> Self { self.spacing = v; self }
    pub fn title_color(mut self, v: Color) -> Self { self.title_color = v; self }

    fn inner_width(&self) -> f32 {
        (self.width - self.padding.h()).max(0.0)
    }

    fn child_constraints(&self) -> Constraints {
        Constraints::loose(Vec2::new(self.inner_width(), f32::INFINITY))
    }

    /// Child rects, top to bottom, for a panel placed at `rect`.
    fn layout(&self, rect: Rect) -> Vec<Rect> {
        let (_, body) = rect.split_top(self.title_height);
        let inner = inset_rect(body, self.padding);
        let c = self.child_constraints();

        let mut y = inner.origin.y;
        self.children
            .iter()
            .map(|child| {
                let size = child.measure(c);
                let r = Rect::new(inner.origin.x, y, inner.size.x, size.y);
                y += size.y + self.spacing;
                r
            })
            .collect()
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let c = self.child_constraints();
        let content: f32 = self.children.iter().map(|ch| ch.measure(c).y).sum();
        let gaps = self.spacing * self.children.len().saturating_sub(1) as f32;
        let h = self.title_height + self.padding.v() + content + gaps;
        constraints.constrain(Vec2::new(self.width, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.fill_rect(rect, self.background);
        let (title, _) = rect.split_top(self.title_height);
        painter.fill_rect(title, self.title_color);
        painter.stroke_rect(rect, 1.0, self.border_color);

        for (child, r) in self.children.iter().zip(self.layout(rect)) {
            child.paint(painter, r);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        let rects = self.layout(rect);
        for (child, r) in self.children.iter_mut().zip(rects) {
            if child.on_event(event, r).is_consumed() {
                return EventResult::Consumed;
            }
        }
        match event {
            UiEvent::Press { pos } | UiEvent::ScrollWheel { pos, .. } if rect.contains(*pos) => {
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(f32);

    impl Widget for Row {
        fn measure(&self, c: Constraints) -> Vec2 {
            c.constrain(Vec2::new(c.max.x, self.0))
        }
        fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
    }

    #[test]
    fn measure_stacks_children_with_spacing() {
        let panel = Panel::new().child(Row(20.0)).child(Row(30.0));
        let size = panel.measure(Constraints::unbounded());
        // title 8 + padding 16 + 20 + 6 + 30
        assert_eq!(size, Vec2::new(220.0, 80.0));
    }

    #[test]
    fn layout_places_children_below_title() {
        let panel = Panel::new().child(Row(20.0)).child(Row(30.0));
        let rects = panel.layout(Rect::new(12.0, 70.0, 220.0, 80.0));
        assert_eq!(rects[0], Rect::new(20.0, 86.0, 204.0, 20.0));
        assert_eq!(rects[1], Rect::new(20.0, 112.0, 204.0, 30.0));
    }

    #[test]
    fn presses_on_the_panel_do_not_fall_through() {
        let mut panel = Panel::new().child(Row(20.0));
        let rect = Rect::new(0.0, 0.0, 220.0, 44.0);
        let inside = UiEvent::Press { pos: Vec2::new(100.0, 2.0) };
        let outside = UiEvent::Press { pos: Vec2::new(300.0, 2.0) };
        assert!(panel.on_event(&inside, rect).is_consumed());
        assert!(!panel.on_event(&outside, rect).is_consumed());
        assert!(!panel.on_event(&UiEvent::Hover { pos: Vec2::new(1.0, 1.0) }, rect).is_consumed());
    }
}
