use std::path::PathBuf;

use anyhow::Result;

use clockface_dial::{ClockFace, Redraw};
use clockface_engine::coords::Viewport;
use clockface_engine::runtime::{App, AppControl, RuntimeCtx};
use clockface_engine::schedule::TimerHandle;
use clockface_engine::time::WallClock;

use crate::canvas::Canvas;

/// Live host: redraws the face whenever its redraw request fires and
/// overwrites `output` with the new frame.
pub struct StudioApp<C: WallClock> {
    face: ClockFace,
    canvas: Canvas,
    clock: C,
    viewport: Viewport,
    output: PathBuf,
    /// Frames left before exiting; `None` runs until interrupted.
    frames_left: Option<u64>,
    frames_written: u64,
    error: Option<anyhow::Error>,
}

impl<C: WallClock> StudioApp<C> {
    pub fn new(face: ClockFace, canvas: Canvas, clock: C, output: PathBuf, frames: Option<u64>) -> Self {
        Self {
            face,
            canvas,
            clock,
            viewport: Viewport::default(),
            output,
            frames_left: frames,
            frames_written: 0,
            error: None,
        }
    }

    #[inline]
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    #[inline]
    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    /// Consumes the app, surfacing the error that ended the loop, if any.
    pub fn finish(self) -> Result<u64> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.frames_written),
        }
    }

    fn redraw(&mut self, ctx: &mut RuntimeCtx<'_, Redraw>) -> Result<()> {
        let (face, clock) = (&mut self.face, &self.clock);
        let time = self.canvas.record(|surface| face.draw(surface, clock, &mut *ctx.scheduler));

        self.canvas.write_png(self.viewport, &self.output)?;
        self.frames_written += 1;
        log::info!(
            "frame {} at {time} written to {} ({:?} since previous)",
            ctx.time.frame_index,
            self.output.display(),
            ctx.time.dt
        );
        Ok(())
    }
}

impl<C: WallClock> App for StudioApp<C> {
    type Task = Redraw;

    fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.face.on_size_changed(viewport.width, viewport.height);
    }

    fn on_start(&mut self, ctx: &mut RuntimeCtx<'_, Redraw>) -> AppControl {
        if self.frames_left == Some(0) {
            return AppControl::Exit;
        }
        self.face.start(ctx.scheduler);
        AppControl::Continue
    }

    fn on_task(&mut self, handle: TimerHandle, _: Redraw, ctx: &mut RuntimeCtx<'_, Redraw>) -> AppControl {
        if !self.face.on_redraw_due(handle) {
            log::debug!("ignoring stale redraw {handle:?}");
            return AppControl::Continue;
        }

        if let Err(e) = self.redraw(ctx) {
            log::error!("{e:#}");
            self.error = Some(e);
            return AppControl::Exit;
        }

        match self.frames_left.as_mut() {
            Some(left) => {
                *left -= 1;
                if *left == 0 { AppControl::Exit } else { AppControl::Continue }
            }
            None => AppControl::Continue,
        }
    }

    fn on_exit(&mut self, ctx: &mut RuntimeCtx<'_, Redraw>) {
        self.face.stop(ctx.scheduler);
    }
}
