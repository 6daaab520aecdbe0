//! Host loop.
//!
//! Owns the task queue and the real time base, and wires them to an [`App`].
//! Everything runs on the calling thread; between tasks the loop sleeps until
//! the next deadline.

mod app;
mod run;

pub use app::{App, AppControl, RuntimeCtx};
pub use run::{Runtime, RuntimeConfig};
