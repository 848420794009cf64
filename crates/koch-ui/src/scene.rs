use koch_engine::coords::{Rect, Vec2};
use koch_engine::input::{InputFrame, InputState, MouseButton};
use koch_engine::scene::DrawList;

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Element;

/// Pointer snapshot for one UI frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiInput {
    /// Pointer position in logical pixels, `None` while outside the window.
    pub mouse_pos: Option<Vec2>,
    /// True while the primary button is held.
    pub mouse_down: bool,
    /// Primary button went down this frame.
    pub pressed: bool,
    /// Primary button went up this frame.
    pub released: bool,
    /// Vertical wheel movement this frame, in lines (positive = up).
    pub wheel_lines: f32,
}

impl UiInput {
    /// Builds the snapshot from the engine's input state and frame deltas.
    pub fn from_engine(state: &InputState, frame: &InputFrame) -> Self {
        Self {
            mouse_pos: state.pointer_pos.map(|(x, y)| Vec2::new(x, y)),
            mouse_down: state.button_down(MouseButton::Left),
            pressed: frame.buttons_pressed.contains(&MouseButton::Left),
            released: frame.buttons_released.contains(&MouseButton::Left),
            wheel_lines: frame.wheel_lines,
        }
    }
}

/// Owns what the UI keeps between frames: the draw list allocation and the
/// drag in progress.
#[derive(Debug, Default)]
pub struct UiScene {
    /// Populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
    drag_start: Option<Vec2>,
    last_pos: Vec2,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints and routes input through `root` for one frame. The root always
    /// covers the whole viewport.
    ///
    /// Painting sees the pointer state before this frame's events apply, so
    /// a value change shows up on the next frame. Returns the draw list and
    /// whether any widget consumed a pointer event.
    pub fn frame(&mut self, mut root: Element, viewport: Vec2, input: &UiInput) -> (&mut DrawList, bool) {
        self.draw_list.clear();

        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        {
            let mut painter = Painter::new(&mut self.draw_list, input.mouse_pos, input.mouse_down);
            root.paint(&mut painter, rect);
        }

        let mut consumed = false;
        for event in self.events(input) {
            consumed |= root.on_event(&event, rect).is_consumed();
        }

        (&mut self.draw_list, consumed)
    }

    /// Turns the snapshot into events, updating drag tracking.
    fn events(&mut self, input: &UiInput) -> Vec<UiEvent> {
        let mut out = Vec::new();
        if let Some(pos) = input.mouse_pos {
            self.last_pos = pos;
            out.push(UiEvent::Hover { pos });
        }
        let pos = self.last_pos;

        if input.pressed {
            self.drag_start = Some(pos);
            out.push(UiEvent::Press { pos });
        }
        if let Some(start) = self.drag_start {
            if input.mouse_down && !input.pressed {
                out.push(UiEvent::Drag { pos, start });
            }
            if input.released || !input.mouse_down {
                out.push(UiEvent::DragEnd { pos, start });
                self.drag_start = None;
            }
        }
        if input.wheel_lines != 0.0 && input.mouse_pos.is_some() {
            out.push(UiEvent::ScrollWheel { pos, lines: input.wheel_lines });
        }
        out
    }
}
