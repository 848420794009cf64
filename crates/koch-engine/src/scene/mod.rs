//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands for UI overlays
//! - keep paint order equal to insertion order (painter's algorithm)

mod cmd;
mod list;

pub use cmd::{DrawCmd, RectCmd};
pub use list::DrawList;
