//! Font loading and text metrics.
//!
//! Layout code never talks to `fontdue` directly: it asks a [`TextMetrics`]
//! implementation for line metrics and advance widths.

mod font_system;
mod metrics;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use metrics::{FallbackMetrics, FontMetrics, LineMetrics, TextMetrics};
