//! Shape renderers fed from `scene::DrawList`.

pub(crate) mod common;

pub mod rect;

pub use rect::RectRenderer;
