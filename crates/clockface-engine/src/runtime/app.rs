use crate::coords::Viewport;
use crate::schedule::{TaskQueue, TimerHandle};
use crate::time::FrameTime;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Per-callback context: the scheduler the app posts deferred work to, plus
/// timing of the current dispatch.
pub struct RuntimeCtx<'a, T> {
    pub scheduler: &'a mut TaskQueue<T>,
    pub time: FrameTime,
}

/// Application contract implemented by hosts.
pub trait App {
    /// Payload of the deferred tasks this app schedules.
    type Task;

    /// Called when the drawable size becomes known or changes.
    fn on_resize(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// Called once before the first task is dispatched.
    fn on_start(&mut self, ctx: &mut RuntimeCtx<'_, Self::Task>) -> AppControl;

    /// Called for every task whose deadline elapsed.
    fn on_task(
        &mut self,
        handle: TimerHandle,
        task: Self::Task,
        ctx: &mut RuntimeCtx<'_, Self::Task>,
    ) -> AppControl;

    /// Called once when the loop ends; the place to cancel outstanding work.
    fn on_exit(&mut self, ctx: &mut RuntimeCtx<'_, Self::Task>) {
        let _ = ctx;
    }
}
