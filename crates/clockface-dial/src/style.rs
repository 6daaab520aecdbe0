use std::time::Duration;

use clockface_engine::paint::Color;
use clockface_engine::scene::LineCap;

use crate::needle::Needle;

/// Tick-mark ring.
#[derive(Debug, Clone, PartialEq)]
pub struct TickStyle {
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
    /// Opacity of every fifth tick (the hour markers).
    pub highlight_opacity: f32,
    pub dim_opacity: f32,
    /// Where a tick starts, as a fraction of the radius. Ticks end on the rim.
    pub inner_ratio: f32,
}

impl Default for TickStyle {
    fn default() -> Self {
        Self {
            width: 8.0,
            color: Color::white(),
            cap: LineCap::Round,
            highlight_opacity: 1.0,
            dim_opacity: 128.0 / 255.0,
            inner_ratio: 0.95,
        }
    }
}

/// One needle.
#[derive(Debug, Clone, PartialEq)]
pub struct NeedleStyle {
    pub width: f32,
    /// Needle length as a fraction of the radius.
    pub length_ratio: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl NeedleStyle {
    pub fn new(width: f32, length_ratio: f32) -> Self {
        Self { width, length_ratio, color: Color::white(), cap: LineCap::Round }
    }
}

/// Hour numerals.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitStyle {
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Distance of each numeral's center from the face center, as a fraction of the radius.
    pub distance_ratio: f32,
}

impl Default for DigitStyle {
    fn default() -> Self {
        Self { size: 80.0, color: Color::white(), distance_ratio: 0.8 }
    }
}

/// Fixed look and cadence of a [`ClockFace`](crate::ClockFace).
///
/// Built once before the face is constructed; the face never mutates it.
///
/// ```rust,ignore
/// let style = ClockStyle::default()
///     .color(Color::from_srgb_u8(0xf0, 0xe6, 0xd2, 0xff))
///     .digit_size(48.0)
///     .redraw_interval(Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClockStyle {
    pub ticks: TickStyle,
    pub hour: NeedleStyle,
    pub minute: NeedleStyle,
    pub second: NeedleStyle,
    pub digits: DigitStyle,
    /// Delay between a finished frame and the next redraw.
    pub redraw_interval: Duration,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            ticks: TickStyle::default(),
            hour: NeedleStyle::new(12.0, 0.4),
            minute: NeedleStyle::new(8.0, 0.6),
            second: NeedleStyle::new(4.0, 0.8),
            digits: DigitStyle::default(),
            redraw_interval: Duration::from_millis(1000),
        }
    }
}

impl ClockStyle {
    #[inline]
    pub fn needle(&self, needle: Needle) -> &NeedleStyle {
        match needle {
            Needle::Hour => &self.hour,
            Needle::Minute => &self.minute,
            Needle::Second => &self.second,
        }
    }

    pub fn with_needle(mut self, needle: Needle, style: NeedleStyle) -> Self {
        match needle {
            Needle::Hour => self.hour = style,
            Needle::Minute => self.minute = style,
            Needle::Second => self.second = style,
        }
        self
    }

    /// Paints ticks, needles and numerals in one color.
    pub fn color(mut self, color: Color) -> Self {
        self.ticks.color = color;
        self.hour.color = color;
        self.minute.color = color;
        self.second.color = color;
        self.digits.color = color;
        self
    }

    pub fn digit_size(mut self, size: f32) -> Self { self.digits.size = size; self }
    pub fn tick_width(mut self, width: f32) -> Self { self.ticks.width = width; self }
    pub fn redraw_interval(mut self, interval: Duration) -> Self { self.redraw_interval = interval; self }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_needle_ratios() {
        let s = ClockStyle::default();
        assert_eq!(s.needle(Needle::Hour).length_ratio, 0.4);
        assert_eq!(s.needle(Needle::Minute).length_ratio, 0.6);
        assert_eq!(s.needle(Needle::Second).length_ratio, 0.8);
        assert_eq!(s.digits.distance_ratio, 0.8);
    }

    #[test]
    fn default_widths_and_cadence() {
        let s = ClockStyle::default();
        assert_eq!((s.hour.width, s.minute.width, s.second.width), (12.0, 8.0, 4.0));
        assert_eq!(s.ticks.width, 8.0);
        assert_eq!(s.digits.size, 80.0);
        assert_eq!(s.redraw_interval, Duration::from_millis(1000));
    }

    #[test]
    fn color_applies_everywhere() {
        let red = Color::from_srgb_u8(255, 0, 0, 255);
        let s = ClockStyle::default().color(red);
        assert_eq!(s.ticks.color, red);
        assert_eq!(s.hour.color, red);
        assert_eq!(s.second.color, red);
        assert_eq!(s.digits.color, red);
    }

    #[test]
    fn size_setters_touch_only_their_field() {
        let style = ClockStyle::default().digit_size(24.0).tick_width(2.0);
        assert_eq!(style.digits.size, 24.0);
        assert_eq!(style.ticks.width, 2.0);
        assert_eq!(style.ticks.inner_ratio, TickStyle::default().inner_ratio);
        assert_eq!(style.needle(Needle::Hour).width, 12.0);
    }

    #[test]
    fn with_needle_replaces_only_that_needle() {
        let s = ClockStyle::default().with_needle(Needle::Minute, NeedleStyle::new(3.0, 0.7));
        assert_eq!(s.minute.width, 3.0);
        assert_eq!(s.hour, ClockStyle::default().hour);
    }
}
