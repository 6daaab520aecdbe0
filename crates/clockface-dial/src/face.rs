use std::time::Duration;

use clockface_engine::schedule::{Scheduler, TimerHandle};
use clockface_engine::time::{TimeSample, WallClock};

use crate::geometry::{FaceGeometry, GeometryCache};
use crate::needle::{dial_point, digit_angle, digit_label, Needle, DIGIT_COUNT};
use crate::style::ClockStyle;
use crate::surface::{Stroke, Surface, TextStyle};

/// Payload of the face's deferred redraw request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Redraw;

/// Whether a redraw request is outstanding.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RedrawState {
    Idle,
    Scheduled(TimerHandle),
}

/// Analog clock face that keeps itself fresh.
///
/// Host hooks:
/// - [`on_size_changed`](Self::on_size_changed) whenever layout changes
/// - [`draw`](Self::draw) whenever a frame is needed
/// - [`on_redraw_due`](Self::on_redraw_due) when a scheduled [`Redraw`] fires
///
/// Lifecycle: every drawn frame leaves exactly one [`Redraw`] pending,
/// `redraw_interval` later. [`start`](Self::start) requests an immediate
/// first redraw. [`stop`](Self::stop) cancels the pending request and keeps
/// later frames from re-arming until the next `start`.
#[derive(Debug)]
pub struct ClockFace {
    style: ClockStyle,
    geometry: GeometryCache,
    redraw: RedrawState,
    running: bool,
}

impl ClockFace {
    pub fn new(style: ClockStyle) -> Self {
        let geometry = GeometryCache::new(style.ticks.inner_ratio);
        Self { style, geometry, redraw: RedrawState::Idle, running: true }
    }

    #[inline]
    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    /// Geometry of the last layout, `None` before the first size report.
    #[inline]
    pub fn geometry(&self) -> Option<&FaceGeometry> {
        self.geometry.get()
    }

    #[inline]
    pub fn redraw_state(&self) -> RedrawState {
        self.redraw
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    // ── host hooks ────────────────────────────────────────────────────────

    /// Size-change hook. Returns whether the geometry was rebuilt.
    pub fn on_size_changed(&mut self, width: f32, height: f32) -> bool {
        self.geometry.rebuild_if_needed(width, height)
    }

    /// Requests an immediate redraw and resumes re-arming after [`stop`](Self::stop).
    /// No-op while a request is already pending.
    pub fn start<S: Scheduler<Redraw>>(&mut self, scheduler: &mut S) {
        self.running = true;
        if self.redraw != RedrawState::Idle {
            return;
        }
        self.arm(scheduler, Duration::ZERO);
        log::info!("clock face started");
    }

    /// Ends the refresh loop and cancels any pending redraw.
    pub fn stop<S: Scheduler<Redraw>>(&mut self, scheduler: &mut S) {
        if let RedrawState::Scheduled(handle) = self.redraw {
            scheduler.cancel(handle);
        }
        self.redraw = RedrawState::Idle;
        if std::mem::replace(&mut self.running, false) {
            log::info!("clock face stopped");
        }
    }

    /// Marks the pending request as fired. Returns `false` for stale or
    /// unknown handles, which the host should ignore.
    pub fn on_redraw_due(&mut self, handle: TimerHandle) -> bool {
        match self.redraw {
            RedrawState::Scheduled(pending) if pending == handle => {
                self.redraw = RedrawState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Draw hook: samples `clock`, draws a frame, then arms the next redraw
    /// unless the face was stopped. Returns the sampled time.
    ///
    /// # Panics
    /// If no size was ever reported (see [`render_frame`](Self::render_frame)).
    pub fn draw<F, C, S>(&mut self, surface: &mut F, clock: &C, scheduler: &mut S) -> TimeSample
    where
        F: Surface + ?Sized,
        C: WallClock + ?Sized,
        S: Scheduler<Redraw>,
    {
        let time = clock.now();
        log::debug!("draw clock time: {time}");

        self.render_frame(surface, time);

        if self.running {
            self.arm(scheduler, self.style.redraw_interval);
        }
        time
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Draws ticks, needles and numerals for `time`.
    ///
    /// # Panics
    /// If called before the first [`on_size_changed`](Self::on_size_changed):
    /// the host broke its integration contract.
    pub fn render_frame<F: Surface + ?Sized>(&self, surface: &mut F, time: TimeSample) {
        let Some(geometry) = self.geometry.get() else {
            panic!("ClockFace::render_frame called before on_size_changed reported a size");
        };

        self.draw_ticks(surface, geometry);
        self.draw_needles(surface, geometry, time);
        self.draw_digits(surface, geometry);
    }

    fn draw_ticks<F: Surface + ?Sized>(&self, surface: &mut F, geometry: &FaceGeometry) {
        let s = &self.style.ticks;
        let highlight = Stroke::new(s.width, s.color).cap(s.cap).opacity(s.highlight_opacity);
        let dim = Stroke::new(s.width, s.color).cap(s.cap).opacity(s.dim_opacity);

        for (i, tick) in geometry.ticks().iter().enumerate() {
            let stroke = if i % 5 == 0 { &highlight } else { &dim };
            surface.stroke_line(tick.start, tick.end, stroke);
        }
    }

    fn draw_needles<F: Surface + ?Sized>(
        &self,
        surface: &mut F,
        geometry: &FaceGeometry,
        time: TimeSample,
    ) {
        let center = geometry.center();
        for needle in Needle::DRAW_ORDER {
            let s = self.style.needle(needle);
            let end = dial_point(center, needle.angle(time), s.length_ratio * geometry.radius());
            surface.stroke_line(center, end, &Stroke::new(s.width, s.color).cap(s.cap));
        }
    }

    fn draw_digits<F: Surface + ?Sized>(&self, surface: &mut F, geometry: &FaceGeometry) {
        let s = &self.style.digits;
        let text = TextStyle { size: s.size, color: s.color };
        let distance = s.distance_ratio * geometry.radius();

        for k in 0..DIGIT_COUNT {
            let anchor = dial_point(geometry.center(), digit_angle(k), distance);
            surface.fill_text_centered(anchor, &digit_label(k), &text);
        }
    }

    /// Replaces any pending request with one due after `delay`.
    fn arm<S: Scheduler<Redraw>>(&mut self, scheduler: &mut S, delay: Duration) {
        if let RedrawState::Scheduled(stale) = self.redraw {
            scheduler.cancel(stale);
        }
        self.redraw = RedrawState::Scheduled(scheduler.schedule(delay, Redraw));
    }
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new(ClockStyle::default())
    }
}
