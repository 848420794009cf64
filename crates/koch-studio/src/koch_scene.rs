use std::cell::Cell;
use std::rc::Rc;

use koch_core::{Depth, KochCurve};
use koch_engine::input::{InputFrame, InputState, Key};
use koch_engine::paint::Color;
use koch_engine::render::{LineLoopRenderer, RenderCtx, RenderTarget};
use koch_engine::time::FrameTime;
use koch_ui::prelude::{Panel, Slider, Stack};

use crate::scene::Scene;

const CURVE_COLOR: Color = Color::from_premul(1.0, 0.5, 0.2, 1.0);

/// Where the "Figure" panel sits, in logical pixels.
const FIGURE_PANEL_POS: (f32, f32) = (12.0, 70.0);

/// Koch snowflake with a depth slider.
///
/// The slider, the keyboard and the startup argument all write the requested
/// depth into one shared cell; `update` feeds it to the curve once per frame.
pub struct KochCurveScene {
    curve: KochCurve,
    depth: Rc<Cell<i64>>,
    vertices: Vec<[f32; 2]>,
    renderer: LineLoopRenderer,
}

impl KochCurveScene {
    pub fn new(initial: Depth) -> Self {
        let curve = KochCurve::new(initial);
        let vertices = flatten(&curve);
        Self {
            curve,
            depth: Rc::new(Cell::new(i64::from(initial))),
            vertices,
            renderer: LineLoopRenderer::new(),
        }
    }

    fn requested(&self) -> Depth {
        Depth::clamped(self.depth.get())
    }

    fn set_depth(&self, depth: Depth) {
        self.depth.set(i64::from(depth));
    }
}

fn flatten(curve: &KochCurve) -> Vec<[f32; 2]> {
    curve.points().iter().map(|p| p.to_f32()).collect()
}

impl Scene for KochCurveScene {
    fn name(&self) -> &str {
        "koch curve"
    }

    fn init(&mut self) {
        log::info!("koch curve scene ready, requested depth {}", self.curve.requested_depth());
    }

    fn handle_input(&mut self, _input: &InputState, frame: &InputFrame) {
        for key in &frame.key_hits {
            match key {
                Key::ArrowLeft | Key::Minus => self.set_depth(self.requested().shallower()),
                Key::ArrowRight | Key::Equal => self.set_depth(self.requested().deeper()),
                Key::Home => self.set_depth(Depth::MIN),
                Key::End => self.set_depth(Depth::MAX),
                _ => {}
            }
        }
    }

    fn update(&mut self, _time: &FrameTime) {
        self.curve.set_requested_depth(self.depth.get());
        self.depth.set(i64::from(self.curve.requested_depth()));

        if self.curve.recompute().is_rebuilt() {
            self.vertices = flatten(&self.curve);
            log::info!(
                "depth {} -> {} points",
                self.curve.realized_depth(),
                self.vertices.len()
            );
        }
    }

    fn ui(&mut self, overlay: Stack) -> Stack {
        let binding = Rc::clone(&self.depth);
        let slider = Slider::new(i64::from(Depth::MIN), i64::from(Depth::MAX))
            .value(self.depth.get())
            .on_change(move |v| binding.set(v));

        let (x, y) = FIGURE_PANEL_POS;
        overlay.place(x, y, Panel::new().child(slider))
    }

    fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.renderer
            .render(ctx, target, self.curve.version(), &self.vertices, CURVE_COLOR);
    }

    fn clear(&mut self) {
        self.vertices = Vec::new();
        log::debug!("koch curve scene cleared");
    }

    fn status(&self) -> String {
        format!(
            "n = {} | {} points",
            self.curve.realized_depth(),
            self.curve.points().len()
        )
    }
}
