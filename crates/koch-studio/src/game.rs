use koch_engine::coords::Vec2;
use koch_engine::core::{App, AppControl, FrameCtx};
use koch_engine::input::Key;
use koch_engine::paint::Color;
use koch_engine::render::shapes::RectRenderer;
use koch_engine::time::FrameStats;
use koch_ui::prelude::{BarPlot, Panel, Stack, UiInput, UiScene};

use crate::scene::Scene;

pub const TITLE: &str = "Koch curve";

/// Seconds between window title refreshes.
const TITLE_INTERVAL: f64 = 0.5;

/// Frame budget drawn as the plot's reference line (60 Hz).
const FRAME_BUDGET_MS: f32 = 1000.0 / 60.0;

/// Application host: owns the scene stack, the UI and the debug overlay.
pub struct Game {
    scenes: Vec<Box<dyn Scene>>,
    ui: UiScene,
    rects: RectRenderer,
    stats: FrameStats,
    show_debug: bool,
    /// `elapsed` at the last title refresh.
    title_refreshed: Option<f64>,
}

impl Game {
    pub fn new(mut first: Box<dyn Scene>) -> Self {
        first.init();
        log::debug!("scene {:?} pushed", first.name());
        Self {
            scenes: vec![first],
            ui: UiScene::new(),
            rects: RectRenderer::new(),
            stats: FrameStats::new(),
            show_debug: true,
            title_refreshed: None,
        }
    }

    /// Replaces the active scene, clearing the old one.
    pub fn change_scene(&mut self, mut next: Box<dyn Scene>) {
        if let Some(mut old) = self.scenes.pop() {
            log::debug!("scene {:?} -> {:?}", old.name(), next.name());
            old.clear();
        }
        next.init();
        self.scenes.push(next);
    }

    fn debug_panel(&self) -> Panel {
        let samples_ms = self.stats.samples().map(|dt| dt * 1000.0);
        Panel::new()
            .title_color(Color::from_straight(0.45, 0.3, 0.1, 1.0))
            .child(
                BarPlot::new(samples_ms)
                    .slots(self.stats.capacity())
                    .reference(FRAME_BUDGET_MS),
            )
    }

    fn title_due(&mut self, elapsed: f64) -> bool {
        match self.title_refreshed {
            Some(last) if elapsed - last < TITLE_INTERVAL => false,
            _ => {
                self.title_refreshed = Some(elapsed);
                true
            }
        }
    }
}

/// `Koch curve | n = 3 | 192 points | 1.25 ms/frame (800.0 FPS)`
fn window_title(status: &str, stats: &FrameStats) -> String {
    let mut title = String::from(TITLE);
    if !status.is_empty() {
        title.push_str(" | ");
        title.push_str(status);
    }
    if !stats.is_empty() {
        title.push_str(&format!(" | {:.2} ms/frame ({:.1} FPS)", stats.average_ms(), stats.fps()));
    }
    title
}

impl App for Game {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.stats.record(ctx.time.dt);

        if ctx.input_frame.keys_pressed.contains(&Key::Escape) {
            log::info!("escape pressed, exiting");
            return AppControl::Exit;
        }
        if ctx.input_frame.keys_released.contains(&Key::F3) {
            self.show_debug = !self.show_debug;
            log::debug!("debug overlay {}", if self.show_debug { "on" } else { "off" });
        }

        let Some(scene) = self.scenes.last_mut() else {
            return AppControl::Exit;
        };

        scene.handle_input(ctx.input, ctx.input_frame);
        scene.update(&ctx.time);

        let debug = self.show_debug.then(|| self.debug_panel());
        let mut overlay = Stack::new();
        if let Some(panel) = debug {
            overlay = overlay.place(12.0, 10.0, panel);
        }
        let Some(scene) = self.scenes.last_mut() else {
            return AppControl::Exit;
        };
        let overlay = scene.ui(overlay);

        if self.title_due(ctx.time.elapsed) {
            ctx.window.set_title(&window_title(&scene_status(&self.scenes), &self.stats));
        }

        let (w, h) = ctx.window.logical_size();
        let input = UiInput::from_engine(ctx.input, ctx.input_frame);
        let (draw_list, _) = self.ui.frame(overlay.into(), Vec2::new(w, h), &input);

        let rects = &mut self.rects;
        let Some(scene) = self.scenes.last_mut() else {
            return AppControl::Exit;
        };
        ctx.render(Color::BLACK, |rctx, target| {
            scene.render(rctx, target);
            rects.render(rctx, target, draw_list);
        })
    }
}

fn scene_status(scenes: &[Box<dyn Scene>]) -> String {
    scenes.last().map(|s| s.status()).unwrap_or_default()
}

impl Drop for Game {
    fn drop(&mut self) {
        for scene in self.scenes.iter_mut().rev() {
            scene.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use koch_engine::input::{InputFrame, InputState};
    use koch_engine::render::{RenderCtx, RenderTarget};
    use koch_engine::time::FrameTime;

    use super::*;

    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Scene for Probe {
        fn name(&self) -> &str {
            self.name
        }
        fn init(&mut self) {
            self.log.borrow_mut().push(format!("init {}", self.name));
        }
        fn handle_input(&mut self, _: &InputState, _: &InputFrame) {}
        fn update(&mut self, _: &FrameTime) {}
        fn render(&mut self, _: &RenderCtx<'_>, _: &mut RenderTarget<'_>) {}
        fn clear(&mut self) {
            self.log.borrow_mut().push(format!("clear {}", self.name));
        }
        fn status(&self) -> String {
            format!("status {}", self.name)
        }
    }

    fn probe(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Box<dyn Scene> {
        Box::new(Probe { name, log: log.clone() })
    }

    #[test]
    fn change_scene_clears_old_and_inits_new() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut game = Game::new(probe("a", &log));
        game.change_scene(probe("b", &log));
        assert_eq!(game.scenes.len(), 1);
        assert_eq!(scene_status(&game.scenes), "status b");

        drop(game);
        assert_eq!(*log.borrow(), ["init a", "clear a", "init b", "clear b"]);
    }

    #[test]
    fn title_refresh_is_throttled() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut game = Game::new(probe("a", &log));
        assert!(game.title_due(0.0));
        assert!(!game.title_due(0.3));
        assert!(game.title_due(0.5));
        assert!(!game.title_due(0.9));
        assert!(game.title_due(1.2));
    }

    #[test]
    fn title_format() {
        let mut stats = FrameStats::new();
        assert_eq!(window_title("", &stats), "Koch curve");

        stats.record(0.00125);
        stats.record(0.00125);
        assert_eq!(
            window_title("n = 3 | 192 points", &stats),
            "Koch curve | n = 3 | 192 points | 1.25 ms/frame (800.0 FPS)"
        );
    }

    #[test]
    fn debug_overlay_starts_visible() {
        let log = Rc::new(RefCell::new(Vec::new()));
        assert!(Game::new(probe("a", &log)).show_debug);
    }
}
