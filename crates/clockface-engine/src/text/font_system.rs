use std::fmt;

use super::metrics::{FontMetrics, LineMetrics};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the host and
/// lent to the rasterizer each frame.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Returns a reference to the underlying `fontdue::Font`, if `id` is valid.
    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Metrics view over one font, usable wherever a `TextMetrics` is expected.
    pub fn metrics(&self, id: FontId) -> FontMetrics<'_> {
        FontMetrics::new(self, id)
    }

    /// Horizontal line metrics at `size`, or `None` if the font is unknown or
    /// carries no horizontal metrics table.
    pub fn line_metrics(&self, id: FontId, size: f32) -> Option<LineMetrics> {
        let m = self.get(id)?.horizontal_line_metrics(size)?;
        Some(LineMetrics { ascent: m.ascent, descent: m.descent })
    }

    /// Pen advance of a single unwrapped line of `text`, in logical pixels.
    ///
    /// Uses the pen position *after* each glyph (glyph x minus `xmin` plus the
    /// advance) rather than the bitmap right edge, so trailing side bearings
    /// count toward the width the same way they do when the line is laid out.
    pub fn advance_width(&self, text: &str, id: FontId, size: f32) -> Option<f32> {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let font = self.get(id)?;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let w = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        Some(w)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
