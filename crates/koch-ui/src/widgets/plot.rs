use koch_engine::coords::{Rect, Vec2};
use koch_engine::paint::Color;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

/// Non-interactive bar chart, one bar per sample, oldest on the left.
///
/// Used for the frame-time history. Bars above the optional reference line
/// are drawn in the warning color.
pub struct BarPlot {
    values: Vec<f32>,
    slots: usize,
    scale: Option<f32>,
    reference: Option<f32>,
    height: f32,
    background: Color,
    bar_color: Color,
    warn_color: Color,
    reference_color: Color,
}

impl BarPlot {
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        let values: Vec<f32> = values.into_iter().collect();
        Self {
            slots: values.len(),
            values,
            scale: None,
            reference: None,
            height: 48.0,
            background: Color::from_straight(0.16, 0.29, 0.48, 0.3),
            bar_color: Color::from_straight(0.9, 0.7, 0.0, 1.0),
            warn_color: Color::from_straight(1.0, 0.33, 0.2, 1.0),
            reference_color: Color::from_straight(1.0, 1.0, 1.0, 0.3),
        }
    }

    /// Reserve room for at least `n` bars so a filling history does not stretch.
    pub fn slots(mut self, n: usize) -> Self {
        self.slots = n.max(self.values.len());
        self
    }

    /// Value mapped to the full height. Defaults to the largest sample.
    pub fn scale(mut self, v: f32) -> Self {
        self.scale = Some(v);
        self
    }

    pub fn reference(mut self, v: f32) -> Self {
        self.reference = Some(v);
        self
    }

    pub fn height(mut self, v: f32) -> Self { self.height = v; self }

    fn top(&self) -> f32 {
        let max = self.values.iter().copied().fold(0.0_f32, f32::max);
        let top = self.scale.unwrap_or(max).max(self.reference.unwrap_or(0.0));
        if top.is_finite() && top > 0.0 { top } else { 1.0 }
    }

    /// Bar height in pixels for each sample, capped at `full`.
    fn bar_heights(&self, full: f32) -> Vec<f32> {
        let top = self.top();
        self.values
            .iter()
            .map(|v| (v.max(0.0) / top).min(1.0) * full)
            .collect()
    }
}

impl Widget for BarPlot {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { 200.0 };
        constraints.constrain(Vec2::new(w, self.height))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.fill_rect(rect, self.background);
        if self.slots == 0 {
            return;
        }

        let bottom = rect.origin.y + rect.size.y;
        let slot_w = rect.size.x / self.slots as f32;
        let bar_w = (slot_w - 1.0).max(1.0);
        for (i, (h, v)) in self.bar_heights(rect.size.y).into_iter().zip(&self.values).enumerate() {
            let over = self.reference.is_some_and(|r| *v > r);
            let color = if over { self.warn_color } else { self.bar_color };
            let x = rect.origin.x + i as f32 * slot_w;
            painter.fill_rect(Rect::new(x, bottom - h, bar_w, h), color);
        }

        if let Some(r) = self.reference {
            let y = bottom - (r / self.top()).min(1.0) * rect.size.y;
            painter.fill_rect(Rect::new(rect.origin.x, y, rect.size.x, 1.0), self.reference_color);
        }
    }
}
