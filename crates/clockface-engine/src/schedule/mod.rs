//! Deferred work on a single thread.
//!
//! A [`Scheduler`] accepts "run this after `delay`" requests and hands back a
//! [`TimerHandle`] that can cancel them. [`TaskQueue`] is the single-threaded
//! implementation: its time base is advanced explicitly by the owner, from
//! `Instant` in a real host or by hand in tests.

mod queue;

pub use queue::{Due, TaskQueue};

use std::time::Duration;

/// Identifies one scheduled task. Handles are never reused by a queue.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TimerHandle(pub(crate) u64);

/// Delayed-callback primitive.
///
/// `T` is the payload delivered back to the owner when the delay elapses.
pub trait Scheduler<T> {
    /// Schedules `payload` to become due `delay` after the scheduler's current time.
    fn schedule(&mut self, delay: Duration, payload: T) -> TimerHandle;

    /// Cancels a pending task. Returns `false` if it already fired or was cancelled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}
