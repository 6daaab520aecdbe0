use clockface_engine::coords::Vec2;
use clockface_engine::paint::Color;
use clockface_engine::scene::{DrawList, LineCap};
use clockface_engine::text::{FontId, TextMetrics};

/// Line stroke parameters, passed by value to every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    /// Multiplies `color`'s alpha, in `[0, 1]`.
    pub opacity: f32,
    pub cap: LineCap,
}

impl Stroke {
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color, opacity: 1.0, cap: LineCap::Butt }
    }

    pub fn opacity(mut self, opacity: f32) -> Self { self.opacity = opacity; self }
    pub fn cap(mut self, cap: LineCap) -> Self { self.cap = cap; self }

    /// `color` with `opacity` applied.
    #[inline]
    pub fn effective_color(&self) -> Color {
        self.color.with_opacity(self.opacity)
    }
}

/// Text parameters for a single label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
}

/// Drawing primitives a clock face needs from its host.
pub trait Surface {
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);

    /// Draws `text` centered on `anchor`, horizontally by advance width and
    /// vertically by the line box (ascent to descent), not the baseline.
    fn fill_text_centered(&mut self, anchor: Vec2, text: &str, style: &TextStyle);
}

/// [`Surface`] that records into an engine [`DrawList`].
///
/// Text centering is resolved here, through `metrics`, so the draw list only
/// carries top-left origins.
pub struct Recorder<'a> {
    list: &'a mut DrawList,
    metrics: &'a dyn TextMetrics,
    font: Option<FontId>,
}

impl<'a> Recorder<'a> {
    pub fn new(list: &'a mut DrawList, metrics: &'a dyn TextMetrics, font: Option<FontId>) -> Self {
        Self { list, metrics, font }
    }
}

impl Surface for Recorder<'_> {
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.list.push_line(from, to, stroke.width, stroke.effective_color(), stroke.cap);
    }

    fn fill_text_centered(&mut self, anchor: Vec2, text: &str, style: &TextStyle) {
        let width = self.metrics.advance_width(text, style.size);
        let line = self.metrics.line_metrics(style.size);
        let origin = Vec2::new(anchor.x - width / 2.0, line.centered_top(anchor.y));
        self.list.push_text(text, self.font, style.size, style.color, origin);
    }
}
