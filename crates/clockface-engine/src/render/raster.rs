use std::path::Path;

use resvg::tiny_skia::{self, Pixmap};

use crate::coords::Viewport;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use super::RasterError;
use super::shapes::line::stroke_line;
use super::shapes::text::TextRasterizer;

/// Turns a [`DrawList`] into pixels.
///
/// Holds reusable state (glyph cache, text layout) across frames; create one
/// per host and keep it.
#[derive(Default)]
pub struct Rasterizer {
    text: TextRasterizer,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a target of the viewport's pixel size, clears it and paints `list`.
    pub fn render(
        &mut self,
        list: &DrawList,
        fonts: &FontSystem,
        viewport: Viewport,
        clear: Color,
    ) -> Result<Pixmap, RasterError> {
        let (width, height) = viewport.pixel_size();
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RasterError::EmptyTarget { width, height })?;

        if let Some(c) = sk_color(clear) {
            pixmap.fill(c);
        }

        self.paint(&mut pixmap, list, fonts);
        Ok(pixmap)
    }

    /// Paints `list` over the current contents of `pixmap`, in paint order.
    pub fn paint(&mut self, pixmap: &mut Pixmap, list: &DrawList, fonts: &FontSystem) {
        for cmd in list.items() {
            match cmd {
                DrawCmd::Line(line) => stroke_line(pixmap, line),
                DrawCmd::Text(text) => self.text.draw(pixmap, fonts, text),
            }
        }
    }
}

/// Converts a premultiplied engine color to a straight-alpha `tiny-skia` color.
pub(crate) fn sk_color(c: Color) -> Option<tiny_skia::Color> {
    let (r, g, b, a) = c.to_straight();
    tiny_skia::Color::from_rgba(r, g, b, a)
}

/// Copies `pixmap` into a straight-alpha RGBA image.
pub fn to_rgba_image(pixmap: &Pixmap) -> Result<image::RgbaImage, RasterError> {
    let mut buf = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        buf.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), buf).ok_or(RasterError::BufferSize)
}

/// Encodes `pixmap` as PNG at `path`.
pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<(), RasterError> {
    let img = to_rgba_image(pixmap)?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    log::debug!("wrote {}x{} frame to {}", img.width(), img.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::scene::LineCap;

    fn opaque_white(pixmap: &Pixmap, x: u32, y: u32) -> bool {
        let p = pixmap.pixel(x, y).unwrap();
        p.red() == 255 && p.green() == 255 && p.blue() == 255 && p.alpha() == 255
    }

    #[test]
    fn empty_viewport_is_rejected() {
        let mut r = Rasterizer::new();
        let err = r
            .render(&DrawList::new(), &FontSystem::new(), Viewport::new(0.0, 10.0), Color::black())
            .unwrap_err();
        assert!(matches!(err, RasterError::EmptyTarget { width: 0, height: 10 }));
    }

    #[test]
    fn clear_color_fills_target() {
        let mut r = Rasterizer::new();
        let pm = r
            .render(&DrawList::new(), &FontSystem::new(), Viewport::new(4.0, 4.0), Color::black())
            .unwrap();
        let p = pm.pixel(2, 2).unwrap();
        assert_eq!((p.red(), p.alpha()), (0, 255));
    }

    #[test]
    fn stroked_line_covers_its_path_only() {
        let mut list = DrawList::new();
        list.push_line(Vec2::new(2.0, 10.0), Vec2::new(18.0, 10.0), 4.0, Color::white(), LineCap::Butt);

        let mut r = Rasterizer::new();
        let pm = r.render(&list, &FontSystem::new(), Viewport::new(20.0, 20.0), Color::black()).unwrap();

        assert!(opaque_white(&pm, 10, 9));
        assert!(opaque_white(&pm, 10, 10));
        let corner = pm.pixel(0, 0).unwrap();
        assert_eq!(corner.red(), 0);
    }

    #[test]
    fn half_opacity_line_blends_with_background() {
        let mut list = DrawList::new();
        list.push_line(
            Vec2::new(0.0, 5.0),
            Vec2::new(10.0, 5.0),
            4.0,
            Color::white().with_opacity(0.5),
            LineCap::Butt,
        );

        let mut r = Rasterizer::new();
        let pm = r.render(&list, &FontSystem::new(), Viewport::new(10.0, 10.0), Color::black()).unwrap();
        let p = pm.pixel(5, 5).unwrap();
        assert!((120..=136).contains(&p.red()), "got {}", p.red());
        assert_eq!(p.alpha(), 255);
    }

    #[test]
    fn text_without_font_is_skipped() {
        let mut list = DrawList::new();
        list.push_text("12", None, 8.0, Color::white(), Vec2::zero());

        let mut r = Rasterizer::new();
        let pm = r.render(&list, &FontSystem::new(), Viewport::new(8.0, 8.0), Color::black()).unwrap();
        assert!(pm.pixels().iter().all(|p| p.red() == 0));
    }

    #[test]
    fn image_conversion_keeps_dimensions() {
        let pm = Pixmap::new(3, 2).unwrap();
        let img = to_rgba_image(&pm).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
    }
}
