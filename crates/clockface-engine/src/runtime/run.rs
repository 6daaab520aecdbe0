use std::time::{Duration, Instant};

use anyhow::{ensure, Result};

use crate::coords::Viewport;
use crate::schedule::TaskQueue;
use crate::time::FrameClock;

use super::app::{App, AppControl, RuntimeCtx};

/// Host configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Label used in log output.
    pub title: String,
    pub viewport: Viewport,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "clockface".to_string(),
            viewport: Viewport::new(512.0, 512.0),
        }
    }
}

/// Entry point for the host loop.
pub struct Runtime;

impl Runtime {
    /// Runs `app` on the current thread until it returns [`AppControl::Exit`]
    /// or has no pending tasks left.
    pub fn run<A: App>(config: RuntimeConfig, app: &mut A) -> Result<()> {
        ensure!(
            config.viewport.width >= 0.0 && config.viewport.height >= 0.0,
            "viewport must not be negative, got {}x{}",
            config.viewport.width,
            config.viewport.height
        );

        let start = Instant::now();
        let mut queue: TaskQueue<A::Task> = TaskQueue::new();
        let mut clock = FrameClock::new();

        log::info!(
            "{}: starting at {}x{}",
            config.title,
            config.viewport.width,
            config.viewport.height
        );

        app.on_resize(config.viewport);

        let time = clock.tick(queue.now());
        let mut control = app.on_start(&mut RuntimeCtx { scheduler: &mut queue, time });

        while control == AppControl::Continue {
            queue.advance_to(start.elapsed());

            while let Some(due) = queue.pop_due() {
                let time = clock.tick(queue.now());
                log::trace!(
                    "dispatch #{} ({:?} late, {:?} since previous)",
                    time.frame_index,
                    queue.now().saturating_sub(due.deadline),
                    time.dt
                );

                control = app.on_task(
                    due.handle,
                    due.payload,
                    &mut RuntimeCtx { scheduler: &mut queue, time },
                );
                if control == AppControl::Exit {
                    break;
                }
            }

            if control == AppControl::Exit {
                break;
            }

            let Some(wait) = queue.time_until_next() else {
                log::info!("{}: no pending work, stopping", config.title);
                break;
            };
            if wait > Duration::ZERO {
                std::thread::sleep(wait);
            }
        }

        let time = clock.tick(queue.now());
        app.on_exit(&mut RuntimeCtx { scheduler: &mut queue, time });

        if !queue.is_empty() {
            log::debug!("{}: dropping {} pending task(s)", config.title, queue.len());
            queue.clear();
        }

        log::info!("{}: stopped after {} dispatch(es)", config.title, clock.frame_count());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{Scheduler, TimerHandle};

    /// Re-arms itself with a short delay until `remaining` hits zero.
    struct Countdown {
        remaining: u32,
        resized: Option<Viewport>,
        fired: Vec<u32>,
        exited: bool,
    }

    impl App for Countdown {
        type Task = u32;

        fn on_resize(&mut self, viewport: Viewport) {
            self.resized = Some(viewport);
        }

        fn on_start(&mut self, ctx: &mut RuntimeCtx<'_, u32>) -> AppControl {
            ctx.scheduler.schedule(Duration::ZERO, self.remaining);
            AppControl::Continue
        }

        fn on_task(&mut self, _: TimerHandle, task: u32, ctx: &mut RuntimeCtx<'_, u32>) -> AppControl {
            self.fired.push(task);
            if task == 0 {
                return AppControl::Exit;
            }
            ctx.scheduler.schedule(Duration::from_millis(1), task - 1);
            AppControl::Continue
        }

        fn on_exit(&mut self, _: &mut RuntimeCtx<'_, u32>) {
            self.exited = true;
        }
    }

    #[test]
    fn runs_until_app_exits() {
        let mut app = Countdown { remaining: 3, resized: None, fired: Vec::new(), exited: false };
        let config = RuntimeConfig { viewport: Viewport::new(10.0, 20.0), ..RuntimeConfig::default() };

        Runtime::run(config, &mut app).unwrap();

        assert_eq!(app.resized, Some(Viewport::new(10.0, 20.0)));
        assert_eq!(app.fired, vec![3, 2, 1, 0]);
        assert!(app.exited);
    }

    struct Idle;

    impl App for Idle {
        type Task = ();

        fn on_start(&mut self, _: &mut RuntimeCtx<'_, ()>) -> AppControl {
            AppControl::Continue
        }

        fn on_task(&mut self, _: TimerHandle, _: (), _: &mut RuntimeCtx<'_, ()>) -> AppControl {
            AppControl::Continue
        }
    }

    #[test]
    fn stops_when_queue_drains() {
        Runtime::run(RuntimeConfig::default(), &mut Idle).unwrap();
    }

    #[test]
    fn negative_viewport_is_rejected() {
        let config = RuntimeConfig { viewport: Viewport::new(-1.0, 5.0), ..RuntimeConfig::default() };
        assert!(Runtime::run(config, &mut Idle).is_err());
    }
}
