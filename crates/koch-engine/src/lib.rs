//! Koch engine crate.
//!
//! Platform loop, GPU device and the few renderers the demo needs. Higher
//! layers (`koch-ui`, `koch-studio`) talk to it through `core::App`.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
