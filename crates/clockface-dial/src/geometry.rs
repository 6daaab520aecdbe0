use clockface_engine::coords::{Vec2, Viewport};

/// Number of tick marks around the face, one per 6 degrees.
pub const TICK_COUNT: usize = 60;

const TICK_STEP_DEG: usize = 360 / TICK_COUNT;

/// Straight segment between two points in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

/// Layout-dependent geometry of a face.
///
/// Invariant: `ticks.len() == TICK_COUNT`. Tick `i` sits at `6 * i` degrees in
/// screen convention (0 = +X, clockwise), so index 0 is at 3 o'clock and
/// every fifth index lands on an hour position.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceGeometry {
    radius: f32,
    center: Vec2,
    ticks: Vec<LineSegment>,
}

impl FaceGeometry {
    /// Computes geometry for a `width` x `height` area. Negative or non-finite
    /// sizes count as zero.
    pub fn new(width: f32, height: f32, tick_inner_ratio: f32) -> Self {
        let area = sanitized(width, height);
        let radius = area.min_side() / 2.0;
        let center = area.center();

        let inner = radius * tick_inner_ratio;
        let ticks = (0..360)
            .step_by(TICK_STEP_DEG)
            .map(|deg| {
                let dir = Vec2::from_screen_angle((deg as f32).to_radians());
                LineSegment { start: center + dir * inner, end: center + dir * radius }
            })
            .collect();

        Self { radius, center, ticks }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn ticks(&self) -> &[LineSegment] {
        &self.ticks
    }
}

fn sanitized(width: f32, height: f32) -> Viewport {
    let clamp = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Viewport::new(clamp(width), clamp(height))
}

/// Holds the geometry of the last layout and rebuilds it only when the
/// radius changes.
#[derive(Debug, Clone)]
pub struct GeometryCache {
    geometry: Option<FaceGeometry>,
    tick_inner_ratio: f32,
}

impl GeometryCache {
    pub fn new(tick_inner_ratio: f32) -> Self {
        Self { geometry: None, tick_inner_ratio }
    }

    /// `None` until the first size is reported.
    #[inline]
    pub fn get(&self) -> Option<&FaceGeometry> {
        self.geometry.as_ref()
    }

    /// Rebuilds for a new size unless the resulting radius is unchanged.
    /// Returns whether a rebuild happened.
    ///
    /// The very first call always builds, even for a zero-sized area.
    pub fn rebuild_if_needed(&mut self, width: f32, height: f32) -> bool {
        let radius = sanitized(width, height).min_side() / 2.0;
        if self.geometry.as_ref().is_some_and(|g| g.radius == radius) {
            return false;
        }

        self.geometry = Some(FaceGeometry::new(width, height, self.tick_inner_ratio));
        log::debug!("face geometry rebuilt: {width}x{height}, radius {radius}");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    // ── FaceGeometry ──────────────────────────────────────────────────────

    #[test]
    fn radius_is_half_the_shorter_side() {
        for (w, h) in [(200.0, 200.0), (300.0, 120.0), (80.0, 500.0), (1.0, 0.0)] {
            let g = FaceGeometry::new(w, h, 0.95);
            assert_eq!(g.radius(), f32::min(w, h) / 2.0);
            assert_eq!(g.center(), Vec2::new(w / 2.0, h / 2.0));
            assert_eq!(g.ticks().len(), TICK_COUNT);
        }
    }

    #[test]
    fn first_tick_points_right_and_spans_outer_five_percent() {
        let g = FaceGeometry::new(200.0, 200.0, 0.95);
        let t = g.ticks()[0];
        assert!(approx(t.start, Vec2::new(195.0, 100.0)));
        assert!(approx(t.end, Vec2::new(200.0, 100.0)));
    }

    #[test]
    fn ticks_advance_clockwise_on_screen() {
        // 90 degrees in screen space is straight down (6 o'clock).
        let g = FaceGeometry::new(200.0, 200.0, 0.95);
        assert!(approx(g.ticks()[15].end, Vec2::new(100.0, 200.0)));
        assert!(approx(g.ticks()[45].end, Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn every_tick_ends_on_the_rim() {
        let g = FaceGeometry::new(300.0, 120.0, 0.95);
        for t in g.ticks() {
            assert!((t.end.distance(g.center()) - 60.0).abs() < 1e-3);
            assert!((t.start.distance(g.center()) - 57.0).abs() < 1e-3);
        }
    }

    #[test]
    fn zero_size_is_degenerate_but_complete() {
        let g = FaceGeometry::new(0.0, 0.0, 0.95);
        assert_eq!(g.radius(), 0.0);
        assert_eq!(g.ticks().len(), TICK_COUNT);
        assert!(g.ticks().iter().all(|t| t.start == Vec2::zero() && t.end == Vec2::zero()));
    }

    #[test]
    fn negative_size_counts_as_zero() {
        let g = FaceGeometry::new(-10.0, 40.0, 0.95);
        assert_eq!(g.radius(), 0.0);
        assert_eq!(g.center(), Vec2::new(0.0, 20.0));

        let g = FaceGeometry::new(f32::NAN, 40.0, 0.95);
        assert_eq!(g.radius(), 0.0);
        assert_eq!(g.ticks().len(), TICK_COUNT);
    }

    // ── GeometryCache ─────────────────────────────────────────────────────

    #[test]
    fn first_rebuild_always_runs() {
        let mut cache = GeometryCache::new(0.95);
        assert!(cache.get().is_none());
        assert!(cache.rebuild_if_needed(0.0, 0.0));
        assert_eq!(cache.get().unwrap().ticks().len(), TICK_COUNT);
    }

    #[test]
    fn same_radius_keeps_tick_storage() {
        let mut cache = GeometryCache::new(0.95);
        cache.rebuild_if_needed(200.0, 200.0);
        let before = cache.get().unwrap().ticks().as_ptr();

        assert!(!cache.rebuild_if_needed(200.0, 200.0));
        // Different area, same shorter side: still the same radius.
        assert!(!cache.rebuild_if_needed(200.0, 640.0));
        assert_eq!(cache.get().unwrap().ticks().as_ptr(), before);
        // The center is part of the cached geometry and stays with it.
        assert_eq!(cache.get().unwrap().center(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn new_radius_rebuilds() {
        let mut cache = GeometryCache::new(0.95);
        cache.rebuild_if_needed(200.0, 200.0);
        assert!(cache.rebuild_if_needed(100.0, 300.0));
        let g = cache.get().unwrap();
        assert_eq!(g.radius(), 50.0);
        assert_eq!(g.center(), Vec2::new(50.0, 150.0));
        assert_eq!(g.ticks().len(), TICK_COUNT);
    }
}
