//! Koch UI: a small immediate-mode widget layer on top of `koch-engine`.
//!
//! The widget tree is rebuilt every frame from application state. Widgets
//! that edit state do it through callbacks (typically writing into an
//! `Rc<Cell<_>>`), and `UiScene` carries the only state that must survive
//! between frames: the pointer drag in progress.
//!
//! ```rust,ignore
//! use koch_ui::prelude::*;
//!
//! let depth = Rc::new(Cell::new(0_i64));
//! let binding = depth.clone();
//!
//! let (draw_list, _) = ui.frame(
//!     Stack::new()
//!         .place(12.0, 70.0, Panel::new().child(
//!             Slider::new(0, 10)
//!                 .value(depth.get())
//!                 .on_change(move |v| binding.set(v)),
//!         ))
//!         .into(),
//!     viewport,
//!     &UiInput::from_engine(input, input_frame),
//! );
//! rect_renderer.render(rctx, target, draw_list);
//! ```
//!
//! No text rendering: widgets communicate through shape, fill and color.

pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

pub mod prelude {
    pub use crate::constraints::{Constraints, Edges};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        panel::Panel,
        plot::BarPlot,
        slider::Slider,
        stack::Stack,
    };

    pub use koch_engine::coords::{Rect, Vec2};
    pub use koch_engine::paint::Color;
}
