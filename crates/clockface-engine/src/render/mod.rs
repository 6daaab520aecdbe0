//! CPU rasterization of recorded draw lists.
//!
//! Lines are stroked with `tiny-skia` (re-exported by `resvg`); glyphs are
//! rasterized with `fontdue` and composited as coverage masks. Finished frames
//! are encoded with the `image` crate.

mod error;
mod raster;

pub mod shapes;

pub use error::RasterError;
pub use raster::{save_png, to_rgba_image, Rasterizer};
pub use resvg::tiny_skia::Pixmap;
