pub mod panel;
pub mod plot;
pub mod slider;
pub mod stack;
