//! GPU renderers.
//!
//! Each renderer owns its pipeline and buffers and creates them lazily on
//! first use, rebuilding the pipeline if the surface format changes.
//!
//! Coordinate conventions:
//! - `shapes::RectRenderer` takes logical pixels (top-left origin, +Y down)
//!   and converts to NDC in the vertex shader using the viewport uniform.
//! - `LineLoopRenderer` takes NDC positions as-is.

mod ctx;
mod line_loop;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use line_loop::LineLoopRenderer;
