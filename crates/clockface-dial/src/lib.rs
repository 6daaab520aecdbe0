//! Clockface dial: an analog clock face that redraws itself once a second.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use clockface_dial::prelude::*;
//!
//! let mut face = ClockFace::new(ClockStyle::default());
//! let mut queue = TaskQueue::new();
//!
//! face.on_size_changed(200.0, 200.0);
//! face.start(&mut queue);
//!
//! // Whenever the host's queue hands back a due `Redraw`:
//! if face.on_redraw_due(handle) {
//!     let mut list = DrawList::new();
//!     let mut surface = Recorder::new(&mut list, &FallbackMetrics, None);
//!     face.draw(&mut surface, &LocalClock, &mut queue);
//! }
//!
//! // On teardown:
//! face.stop(&mut queue);
//! ```
//!
//! The face never talks to a windowing toolkit. Hosts feed it three things:
//! size changes, draw requests against a [`Surface`](surface::Surface), and a
//! [`Scheduler`](clockface_engine::schedule::Scheduler) for the next redraw.

pub mod face;
pub mod geometry;
pub mod needle;
pub mod style;
pub mod surface;

pub use face::{ClockFace, Redraw, RedrawState};

/// Everything a host needs to drive a face.
pub mod prelude {
    pub use crate::face::{ClockFace, Redraw, RedrawState};
    pub use crate::geometry::{FaceGeometry, LineSegment};
    pub use crate::needle::Needle;
    pub use crate::style::{ClockStyle, DigitStyle, NeedleStyle, TickStyle};
    pub use crate::surface::{Recorder, Stroke, Surface, TextStyle};

    pub use clockface_engine::coords::{Vec2, Viewport};
    pub use clockface_engine::paint::Color;
    pub use clockface_engine::scene::DrawList;
    pub use clockface_engine::schedule::{Scheduler, TaskQueue, TimerHandle};
    pub use clockface_engine::text::{FallbackMetrics, FontMetrics, TextMetrics};
    pub use clockface_engine::time::{FixedClock, LocalClock, TimeSample, WallClock};
}
