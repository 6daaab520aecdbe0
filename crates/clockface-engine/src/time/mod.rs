//! Time subsystem.
//!
//! Two unrelated notions of time live here:
//! - wall-clock time of day (`TimeSample`, read through a `WallClock`)
//! - monotonic frame timing (`FrameClock`), driven by the host's time base
//!
//! Both are injectable so tests never depend on real time.

mod frame_clock;
mod sample;
mod wall_clock;

pub use frame_clock::{FrameClock, FrameTime};
pub use sample::{ParseTimeError, TimeSample};
pub use wall_clock::{FixedClock, LocalClock, WallClock};
