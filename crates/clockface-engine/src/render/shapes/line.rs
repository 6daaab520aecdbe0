use resvg::tiny_skia::{self, PathBuilder, Pixmap, Transform};

use crate::scene::{LineCap, LineCmd};

use crate::render::raster::sk_color;

fn sk_cap(cap: LineCap) -> tiny_skia::LineCap {
    match cap {
        LineCap::Butt => tiny_skia::LineCap::Butt,
        LineCap::Round => tiny_skia::LineCap::Round,
        LineCap::Square => tiny_skia::LineCap::Square,
    }
}

/// Strokes one line command onto `pixmap` with anti-aliasing.
///
/// Invisible (zero width, zero alpha) and non-finite commands are skipped.
pub(crate) fn stroke_line(pixmap: &mut Pixmap, cmd: &LineCmd) {
    if !(cmd.width > 0.0) || cmd.color.a <= 0.0 || !cmd.from.is_finite() || !cmd.to.is_finite() {
        return;
    }
    cmd.color.debug_assert_premul();

    let mut pb = PathBuilder::new();
    pb.move_to(cmd.from.x, cmd.from.y);
    pb.line_to(cmd.to.x, cmd.to.y);
    let Some(path) = pb.finish() else {
        // Degenerate path (e.g. a zero-length needle on a zero-radius face).
        return;
    };

    let Some(color) = sk_color(cmd.color) else {
        return;
    };

    let mut paint = tiny_skia::Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;

    let stroke = tiny_skia::Stroke {
        width: cmd.width,
        line_cap: sk_cap(cmd.cap),
        ..tiny_skia::Stroke::default()
    };

    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}
