//! Contracts between the runtime loop and the application.
//!
//! The runtime owns the platform objects; the application only ever sees
//! them through `FrameCtx` for the duration of one frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
