//! Koch curve geometry for the `koch` demo.
//!
//! This crate owns the only algorithmic part of the demo: recursive
//! subdivision of a fixed base triangle into a Koch snowflake outline, plus
//! a small cache that rebuilds the outline only when the requested depth
//! changes. It has no GPU or windowing dependencies.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`depth`] | `Depth`, the clamped recursion depth |
//! | [`point`] | `Point2`, double precision 2D point |
//! | [`generator`] | `BASE_TRIANGLE`, `generate`, `point_count` |
//! | [`curve`] | `KochCurve` requested/realized state machine |
//! | [`arg`] | startup argument parsing |
//! | [`error`] | `ParseDepthError` |
//!
//! # Quick start
//!
//! ```rust
//! use koch_core::{CurveUpdate, Depth, KochCurve};
//!
//! let mut curve = KochCurve::new(Depth::MIN);
//! curve.set_requested_depth(2);
//! assert_eq!(curve.recompute(), CurveUpdate::Rebuilt);
//! assert_eq!(curve.points().len(), 48);
//! assert_eq!(curve.recompute(), CurveUpdate::Unchanged);
//! ```

pub mod arg;
pub mod curve;
pub mod depth;
pub mod error;
pub mod generator;
pub mod point;

pub use arg::parse_depth_arg;
pub use curve::{CurveUpdate, KochCurve};
pub use depth::Depth;
pub use error::ParseDepthError;
pub use generator::{BASE_TRIANGLE, generate, point_count};
pub use point::Point2;
