use koch_engine::input::{InputFrame, InputState};
use koch_engine::render::{RenderCtx, RenderTarget};
use koch_engine::time::FrameTime;
use koch_ui::prelude::Stack;

/// One screen of the demo. The host drives only the topmost scene.
///
/// Per frame the host calls, in order: `handle_input`, `update`, `ui`,
/// `render`.
pub trait Scene {
    fn name(&self) -> &str;

    /// Called when the scene becomes active.
    fn init(&mut self) {}

    fn handle_input(&mut self, input: &InputState, frame: &InputFrame);

    fn update(&mut self, time: &FrameTime);

    /// Adds this scene's panels to the frame's overlay.
    fn ui(&mut self, overlay: Stack) -> Stack {
        overlay
    }

    fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>);

    /// Called when the scene is replaced or the host shuts down.
    fn clear(&mut self) {}

    /// Short summary for the window title.
    fn status(&self) -> String {
        String::new()
    }
}
