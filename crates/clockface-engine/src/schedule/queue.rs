use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use super::{Scheduler, TimerHandle};

/// A task whose deadline has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct Due<T> {
    pub handle: TimerHandle,
    pub deadline: Duration,
    pub payload: T,
}

/// Deadline-ordered queue of deferred payloads.
///
/// Ordering: earliest deadline first; tasks sharing a deadline fire in the
/// order they were scheduled. Time never runs backwards: `advance_to` with an
/// earlier instant is ignored.
#[derive(Debug)]
pub struct TaskQueue<T> {
    now: Duration,
    next_id: u64,
    /// Keyed by (deadline, id) so ties break on scheduling order.
    pending: BTreeMap<(Duration, u64), T>,
    deadlines: HashMap<u64, Duration>,
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Current time base.
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn advance_to(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn advance_by(&mut self, delta: Duration) {
        self.now = self.now.saturating_add(delta);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[inline]
    pub fn contains(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    /// Deadline of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Time left until the earliest pending task, zero if it is already due.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline().map(|d| d.saturating_sub(self.now))
    }

    /// Removes and returns the earliest task whose deadline is not after `now()`.
    pub fn pop_due(&mut self) -> Option<Due<T>> {
        let (&(deadline, id), _) = self.pending.first_key_value()?;
        if deadline > self.now {
            return None;
        }
        let payload = self.pending.remove(&(deadline, id))?;
        self.deadlines.remove(&id);
        Some(Due { handle: TimerHandle(id), deadline, payload })
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.deadlines.clear();
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> for TaskQueue<T> {
    fn schedule(&mut self, delay: Duration, payload: T) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;

        let deadline = self.now.saturating_add(delay);
        self.pending.insert((deadline, id), payload);
        self.deadlines.insert(id, deadline);

        log::trace!("task {id} scheduled for {deadline:?}");
        TimerHandle(id)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let Some(deadline) = self.deadlines.remove(&handle.0) else {
            return false;
        };
        self.pending.remove(&(deadline, handle.0)).is_some()
    }
}
