//! Coordinate and geometry types shared by the clock face and the rasterizer.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles passed to [`Vec2::from_screen_angle`] follow the screen convention
//! (0 rad = +X, increasing clockwise because +Y points down).

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
