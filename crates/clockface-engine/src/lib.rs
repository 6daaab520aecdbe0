//! Clockface engine crate.
//!
//! This crate owns the host-facing plumbing used by the clock face renderer:
//! geometry and paint types, the recorded draw stream, text metrics, the wall
//! clock, the single-threaded task queue, a CPU rasterizer and the host loop.

pub mod runtime;
pub mod schedule;
pub mod time;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
