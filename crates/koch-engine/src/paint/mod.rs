//! Colour model shared between UI and renderers.

pub mod color;

pub use color::Color;
