//! Pulse Core Geometry
//!
//! This crate provides the foundational primitives for the Pulse chart
//! engine:
//!
//! - **Points and rects**: plain 2-D copy types in `f32`
//! - **Colors**: straight-alpha RGBA with CSS hex emission
//! - **Paths**: vector path descriptors (move/line/arc/close) that emit
//!   SVG path data
//!
//! # Example
//!
//! ```rust
//! use pulse_core::Path;
//!
//! let wedge = Path::new()
//!     .move_to(50.0, 50.0)
//!     .line_to(85.0, 50.0)
//!     .arc_to(35.0, 35.0, 0.0, false, true, 50.0, 85.0)
//!     .close();
//!
//! assert_eq!(wedge.to_svg_data(), "M 50 50 L 85 50 A 35 35 0 0 1 50 85 Z");
//! ```

pub mod color;
pub mod geometry;
pub mod path;

pub use color::Color;
pub use geometry::{Point, Rect};
pub use path::{svg_number, Path, PathCommand};
