use std::cell::Cell;

use chrono::Timelike;

use super::TimeSample;

/// Source of the current local time of day.
pub trait WallClock {
    fn now(&self) -> TimeSample;
}

/// Reads the system's local time.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalClock;

impl WallClock for LocalClock {
    fn now(&self) -> TimeSample {
        let now = chrono::Local::now();
        // Leap seconds surface as second 59 with a nanosecond overflow; clamp anyway.
        TimeSample::from_hms(now.hour(), now.minute(), now.second().min(59))
            .unwrap_or_default()
    }
}

/// Clock frozen at one sample, optionally advancing a second per read.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Cell<TimeSample>,
    ticking: bool,
}

impl FixedClock {
    pub fn new(at: TimeSample) -> Self {
        Self { current: Cell::new(at), ticking: false }
    }

    /// Each `now()` returns the stored sample, then advances it by one second.
    pub fn ticking(at: TimeSample) -> Self {
        Self { current: Cell::new(at), ticking: true }
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> TimeSample {
        let t = self.current.get();
        if self.ticking {
            self.current.set(t.next_second());
        }
        t
    }
}
