//! Paint model shared between the clock face and the rasterizer.
//!
//! Scope: color representation (linear premultiplied alpha) and opacity.
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
