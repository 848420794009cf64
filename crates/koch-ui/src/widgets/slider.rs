use koch_engine::coords::{Rect, Vec2};
use koch_engine::paint::Color;

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// Horizontal slider over an inclusive integer range.
///
/// Press or drag anywhere on the track to pick the nearest integer; the
/// wheel steps one value per line while the pointer is over the slider.
/// `on_change` fires every time the value actually changes.
///
/// ```rust,ignore
/// Slider::new(0, 10)
///     .value(depth.get())
///     .on_change(move |v| depth.set(v))
/// ```
pub struct Slider {
    value: i64,
    min: i64,
    max: i64,
    height: f32,
    track_height: f32,
    thumb_width: f32,
    track_color: Color,
    fill_color: Color,
    tick_color: Color,
    thumb_color: Color,
    thumb_active_color: Color,
    on_change: Option<Box<dyn FnMut(i64)>>,
}

/// Tick marks are only drawn for ranges up to this many steps.
const MAX_TICKS: i64 = 32;

impl Slider {
    /// `min` and `max` are swapped if given in the wrong order.
    pub fn new(min: i64, max: i64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: min,
            min,
            max,
            height: 20.0,
            track_height: 4.0,
            thumb_width: 10.0,
            track_color: Color::from_straight(0.16, 0.29, 0.48, 0.54),
            fill_color: Color::from_straight(0.26, 0.59, 0.98, 0.8),
            tick_color: Color::from_straight(0.8, 0.8, 0.85, 0.35),
            thumb_color: Color::from_straight(0.24, 0.52, 0.88, 1.0),
            thumb_active_color: Color::from_straight(0.46, 0.69, 1.0, 1.0),
            on_change: None,
        }
    }

    /// Initial value, clamped into range. Does not fire `on_change`.
    pub fn value(mut self, v: i64) -> Self {
        self.value = v.clamp(self.min, self.max);
        self
    }
    pub fn on_change(mut self, f: impl FnMut(i64) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn current(&self) -> i64 {
        self.value
    }

    /// Horizontal span the thumb's left edge can travel.
    fn travel(&self, rect: Rect) -> f32 {
        (rect.size.x - self.thumb_width).max(0.0)
    }

    /// Fraction of the range covered by `v`.
    fn fraction(&self, v: i64) -> f32 {
        if self.max == self.min {
            0.0
        } else {
            (v - self.min) as f32 / (self.max - self.min) as f32
        }
    }

    /// Nearest value for a pointer at `x`.
    fn value_at(&self, x: f32, rect: Rect) -> i64 {
        let travel = self.travel(rect);
        if travel <= 0.0 {
            return self.value;
        }
        let t = ((x - rect.origin.x - self.thumb_width * 0.5) / travel).clamp(0.0, 1.0);
        self.min + (t * (self.max - self.min) as f32).round() as i64
    }

    fn thumb_rect(&self, rect: Rect) -> Rect {
        let x = rect.origin.x + self.fraction(self.value) * self.travel(rect);
        Rect::new(x, rect.origin.y, self.thumb_width, rect.size.y)
    }

    /// Clamps and stores `v`, notifying `on_change` if it differs.
    fn set(&mut self, v: i64) {
        let v = v.clamp(self.min, self.max);
        if v == self.value {
            return;
        }
        log::trace!("slider {} -> {}", self.value, v);
        self.value = v;
        if let Some(f) = &mut self.on_change {
            f(v);
        }
    }
}

/// Whole steps for a wheel movement; partial trackpad movement still steps once.
fn wheel_steps(lines: f32) -> i64 {
    if lines.abs() < 1.0 { lines.signum() as i64 } else { lines.trunc() as i64 }
}

impl Widget for Slider {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { 200.0 };
        constraints.constrain(Vec2::new(w, self.height))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let cy = rect.origin.y + rect.size.y * 0.5;
        let track = Rect::new(
            rect.origin.x,
            cy - self.track_height * 0.5,
            rect.size.x,
            self.track_height,
        );
        painter.fill_rect(track, self.track_color);

        let thumb = self.thumb_rect(rect);
        let filled = thumb.center().x - track.origin.x;
        painter.fill_rect(Rect::new(track.origin.x, track.origin.y, filled, track.size.y), self.fill_color);

        let steps = self.max - self.min;
        if steps > 0 && steps <= MAX_TICKS {
            for i in 0..=steps {
                let x = rect.origin.x + self.thumb_width * 0.5 + self.travel(rect) * i as f32 / steps as f32;
                painter.fill_rect(Rect::new(x - 0.5, cy + 4.0, 1.0, 4.0), self.tick_color);
            }
        }

        let active = painter.is_hovered(rect);
        let color = if active { self.thumb_active_color } else { self.thumb_color };
        painter.fill_rect(thumb, color);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match *event {
            UiEvent::Press { pos } if rect.contains(pos) => {
                self.set(self.value_at(pos.x, rect));
                EventResult::Consumed
            }
            UiEvent::Drag { pos, start } | UiEvent::DragEnd { pos, start } if rect.contains(start) => {
                self.set(self.value_at(pos.x, rect));
                EventResult::Consumed
            }
            UiEvent::ScrollWheel { pos, lines } if rect.contains(pos) => {
                self.set(self.value.saturating_add(wheel_steps(lines)));
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    // 0..=10 over a 210px slider: thumb 10px, travel 200px, 20px per step.
    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 210.0, 20.0)
    }

    fn recording(value: i64) -> (Slider, Rc<RefCell<Vec<i64>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let slider = Slider::new(0, 10).value(value).on_change(move |v| sink.borrow_mut().push(v));
        (slider, log)
    }

    #[test]
    fn value_is_clamped_and_range_normalized() {
        assert_eq!(Slider::new(0, 10).value(42).current(), 10);
        assert_eq!(Slider::new(0, 10).value(-3).current(), 0);
        assert_eq!(Slider::new(10, 0).value(5).current(), 5);
    }

    #[test]
    fn position_maps_to_nearest_integer() {
        let s = Slider::new(0, 10);
        assert_eq!(s.value_at(5.0, rect()), 0);
        assert_eq!(s.value_at(65.0, rect()), 3);
        assert_eq!(s.value_at(74.0, rect()), 3);
        assert_eq!(s.value_at(76.0, rect()), 4);
        assert_eq!(s.value_at(-100.0, rect()), 0);
        assert_eq!(s.value_at(1000.0, rect()), 10);
    }

    #[test]
    fn thumb_tracks_value() {
        let s = Slider::new(0, 10).value(5);
        assert_eq!(s.thumb_rect(rect()), Rect::new(100.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn press_and_drag_fire_on_every_change() {
        let (mut s, log) = recording(0);
        assert!(s.on_event(&UiEvent::Press { pos: Vec2::new(65.0, 10.0) }, rect()).is_consumed());
        let start = Vec2::new(65.0, 10.0);
        s.on_event(&UiEvent::Drag { pos: Vec2::new(66.0, 30.0), start }, rect());
        s.on_event(&UiEvent::Drag { pos: Vec2::new(125.0, 30.0), start }, rect());
        s.on_event(&UiEvent::DragEnd { pos: Vec2::new(500.0, 30.0), start }, rect());
        assert_eq!(*log.borrow(), vec![3, 6, 10]);
        assert_eq!(s.current(), 10);
    }

    #[test]
    fn drags_started_elsewhere_are_ignored() {
        let (mut s, log) = recording(2);
        let ev = UiEvent::Drag { pos: Vec2::new(100.0, 10.0), start: Vec2::new(100.0, 50.0) };
        assert!(!s.on_event(&ev, rect()).is_consumed());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn wheel_steps_by_one_and_stops_at_bounds() {
        let (mut s, log) = recording(9);
        let over = Vec2::new(50.0, 10.0);
        s.on_event(&UiEvent::ScrollWheel { pos: over, lines: 1.0 }, rect());
        s.on_event(&UiEvent::ScrollWheel { pos: over, lines: 1.0 }, rect());
        s.on_event(&UiEvent::ScrollWheel { pos: over, lines: -0.25 }, rect());
        s.on_event(&UiEvent::ScrollWheel { pos: Vec2::new(50.0, 90.0), lines: -3.0 }, rect());
        assert_eq!(*log.borrow(), vec![10, 9]);
    }

    #[test]
    fn wheel_step_rounding() {
        assert_eq!(wheel_steps(0.1), 1);
        assert_eq!(wheel_steps(-0.4), -1);
        assert_eq!(wheel_steps(2.7), 2);
        assert_eq!(wheel_steps(-3.0), -3);
    }
}
