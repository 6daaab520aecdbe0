use std::collections::HashMap;

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};
use resvg::tiny_skia::{Pixmap, PixmapPaint, PremultipliedColorU8, Transform};

use crate::paint::Color;
use crate::scene::TextCmd;
use crate::text::FontSystem;

// ── cached glyph ──────────────────────────────────────────────────────────

/// Coverage mask of one rasterized glyph (`width * height` bytes, row-major).
struct CachedGlyph {
    width: usize,
    height: usize,
    coverage: Vec<u8>,
}

/// Rasterizes text commands glyph by glyph.
///
/// The cache key is `fontdue::layout::GlyphRasterConfig`, which encodes font
/// identity, glyph index, and pixel size, so the same glyph at the same size
/// across frames is rasterized only once.
pub(crate) struct TextRasterizer {
    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,
    // reusable fontdue layout
    layout: Layout<()>,
}

impl Default for TextRasterizer {
    fn default() -> Self {
        Self {
            glyph_cache: HashMap::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRasterizer {
    pub(crate) fn draw(&mut self, pixmap: &mut Pixmap, fonts: &FontSystem, cmd: &TextCmd) {
        let Some(id) = cmd.font else {
            return;
        };
        let Some(font) = fonts.get(id) else {
            log::warn!("text '{}' references an unknown font; skipped", cmd.text);
            return;
        };
        if cmd.color.a <= 0.0 || !(cmd.size > 0.0) {
            return;
        }

        self.layout.reset(&LayoutSettings {
            x: cmd.origin.x,
            y: cmd.origin.y,
            ..LayoutSettings::default()
        });
        self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

        // Snapshot glyph positions so the borrow on `self.layout` ends before
        // the cache is mutated.
        let glyph_snap: Vec<(GlyphRasterConfig, f32, f32)> = self
            .layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y))
            .collect();

        for (key, x, y) in glyph_snap {
            let glyph = self.glyph_cache.entry(key).or_insert_with(|| {
                let (metrics, coverage) = font.rasterize_config(key);
                CachedGlyph { width: metrics.width, height: metrics.height, coverage }
            });
            blit(pixmap, glyph, x, y, cmd.color);
        }
    }
}

fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Composites a coverage mask tinted with `color` at (`x`, `y`), source-over.
fn blit(pixmap: &mut Pixmap, glyph: &CachedGlyph, x: f32, y: f32, color: Color) {
    let Some(mut mask) = Pixmap::new(glyph.width as u32, glyph.height as u32) else {
        return;
    };

    for (px, &cov) in mask.pixels_mut().iter_mut().zip(&glyph.coverage) {
        let k = cov as f32 / 255.0;
        *px = PremultipliedColorU8::from_rgba(
            channel(color.r * k),
            channel(color.g * k),
            channel(color.b * k),
            channel(color.a * k),
        )
        .unwrap_or(PremultipliedColorU8::TRANSPARENT);
    }

    pixmap.draw_pixmap(
        x.round() as i32,
        y.round() as i32,
        mask.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
}
