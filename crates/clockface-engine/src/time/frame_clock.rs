use std::time::Duration;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick.
    pub dt: Duration,

    /// Host time base at the tick.
    pub now: Duration,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The clock does not read real time itself: the host passes its own time base
/// to [`tick`](Self::tick), so a fake time base yields deterministic deltas.
/// The first tick reports a zero delta.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Duration>,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self, now: Duration) -> FrameTime {
        let dt = self.last.map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.last = Some(now);

        let ft = FrameTime { dt, now, frame_index: self.frame_index };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}
