use super::{FontId, FontSystem};

/// Vertical metrics of one line of text, in logical pixels.
///
/// `ascent` is positive (above the baseline), `descent` negative (below it),
/// matching `fontdue`'s sign convention.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl LineMetrics {
    #[inline]
    pub fn height(self) -> f32 {
        self.ascent - self.descent
    }

    /// Baseline y that centers the line box (ascent to descent) on `center_y`.
    #[inline]
    pub fn centered_baseline(self, center_y: f32) -> f32 {
        center_y + (self.ascent + self.descent) / 2.0
    }

    /// Top of the line box when it is centered on `center_y`.
    #[inline]
    pub fn centered_top(self, center_y: f32) -> f32 {
        self.centered_baseline(center_y) - self.ascent
    }
}

/// Source of text measurements for layout.
pub trait TextMetrics {
    fn line_metrics(&self, size: f32) -> LineMetrics;

    /// Horizontal advance of `text` laid out on a single line.
    fn advance_width(&self, text: &str, size: f32) -> f32;
}

/// Em-proportional estimate used when no font is loaded.
#[derive(Debug, Copy, Clone, Default)]
pub struct FallbackMetrics;

impl FallbackMetrics {
    const ASCENT_EM: f32 = 0.8;
    const DESCENT_EM: f32 = -0.2;
    const ADVANCE_EM: f32 = 0.55;
}

impl TextMetrics for FallbackMetrics {
    fn line_metrics(&self, size: f32) -> LineMetrics {
        LineMetrics { ascent: size * Self::ASCENT_EM, descent: size * Self::DESCENT_EM }
    }

    fn advance_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * Self::ADVANCE_EM
    }
}

/// Metrics of one loaded font. Falls back to [`FallbackMetrics`] for anything
/// the font cannot answer.
#[derive(Clone, Copy)]
pub struct FontMetrics<'a> {
    fonts: &'a FontSystem,
    font: FontId,
}

impl<'a> FontMetrics<'a> {
    pub fn new(fonts: &'a FontSystem, font: FontId) -> Self {
        Self { fonts, font }
    }

    #[inline]
    pub fn font(&self) -> FontId {
        self.font
    }
}

impl TextMetrics for FontMetrics<'_> {
    fn line_metrics(&self, size: f32) -> LineMetrics {
        self.fonts
            .line_metrics(self.font, size)
            .unwrap_or_else(|| FallbackMetrics.line_metrics(size))
    }

    fn advance_width(&self, text: &str, size: f32) -> f32 {
        self.fonts
            .advance_width(text, self.font, size)
            .unwrap_or_else(|| FallbackMetrics.advance_width(text, size))
    }
}
