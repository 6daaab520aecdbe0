use std::path::Path;

use anyhow::{Context, Result};

use clockface_dial::surface::Recorder;
use clockface_engine::coords::Viewport;
use clockface_engine::paint::Color;
use clockface_engine::render::{save_png, Rasterizer};
use clockface_engine::scene::DrawList;
use clockface_engine::text::{FallbackMetrics, FontId, FontSystem};

/// Recording surface plus everything needed to turn it into a PNG.
pub struct Canvas {
    fonts: FontSystem,
    font: Option<FontId>,
    list: DrawList,
    rasterizer: Rasterizer,
    background: Color,
}

impl Canvas {
    /// An empty `font` keeps the canvas usable: numerals are laid out with
    /// fallback metrics and left unpainted.
    pub fn new(font: &[u8], background: Color) -> Self {
        let mut fonts = FontSystem::new();
        let font = if font.is_empty() {
            log::warn!("no font available; numerals will not be painted");
            None
        } else {
            match fonts.load_font(font) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("{e}; numerals will not be painted");
                    None
                }
            }
        };

        Self { fonts, font, list: DrawList::new(), rasterizer: Rasterizer::new(), background }
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    /// Clears the draw list and hands `f` a surface recording into it.
    pub fn record<R>(&mut self, f: impl FnOnce(&mut Recorder<'_>) -> R) -> R {
        self.list.clear();
        match self.font {
            Some(id) => {
                let metrics = self.fonts.metrics(id);
                let mut surface = Recorder::new(&mut self.list, &metrics, Some(id));
                f(&mut surface)
            }
            None => {
                let mut surface = Recorder::new(&mut self.list, &FallbackMetrics, None);
                f(&mut surface)
            }
        }
    }

    /// Rasterizes the recorded frame at `viewport` size and writes it to `path`.
    pub fn write_png(&mut self, viewport: Viewport, path: &Path) -> Result<()> {
        let pixmap = self
            .rasterizer
            .render(&self.list, &self.fonts, viewport, self.background)
            .context("failed to rasterize clock frame")?;
        save_png(&pixmap, path).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
