use std::fmt;

/// Errors raised while producing or writing a raster frame.
#[derive(Debug)]
pub enum RasterError {
    /// The target has no pixels (zero width or height).
    EmptyTarget { width: u32, height: u32 },
    /// Pixel buffer size did not match the image dimensions.
    BufferSize,
    /// PNG encoding or file IO failed.
    Encode(image::ImageError),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::EmptyTarget { width, height } => {
                write!(f, "cannot rasterize into an empty {width}x{height} target")
            }
            RasterError::BufferSize => write!(f, "pixel buffer does not match image size"),
            RasterError::Encode(e) => write!(f, "failed to encode frame: {e}"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RasterError::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for RasterError {
    fn from(e: image::ImageError) -> Self {
        RasterError::Encode(e)
    }
}
