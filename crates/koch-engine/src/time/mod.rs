//! Time subsystem.
//!
//! - `FrameClock`: one per window, `tick()` once per presented frame
//! - `FrameStats`: rolling frame-time window for the debug overlay

mod frame_clock;
mod frame_stats;

pub use frame_clock::{FrameClock, FrameTime};
pub use frame_stats::FrameStats;
