use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// End-cap style of a stroked line.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Straight stroked segment.
///
/// `color` already carries the stroke opacity (premultiplied).
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Color, cap: LineCap) -> Self {
        Self { from, to, width, color, cap }
    }
}

impl DrawList {
    /// Records a stroked line.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, cap: LineCap) {
        self.push(DrawCmd::Line(LineCmd::new(from, to, width, color, cap)));
    }
}
