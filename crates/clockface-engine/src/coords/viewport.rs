use super::Vec2;

/// Viewport size in logical pixels.
///
/// Hosts report this whenever the drawable area becomes known or changes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Shorter of the two sides.
    #[inline]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Size rounded up to whole device pixels, as `(width, height)`.
    #[inline]
    pub fn pixel_size(self) -> (u32, u32) {
        let px = |v: f32| if v.is_finite() && v > 0.0 { v.ceil() as u32 } else { 0 };
        (px(self.width), px(self.height))
    }
}
