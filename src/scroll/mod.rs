//! Scroll module: continuous wrap-around scrolling.
//!
//! This module contains:
//! - [`ScrollState`]: fractional position advanced from wall-clock time
//! - [`visible_window`]: display-sized crops, stitched across the wrap
//! - [`DurationBounds`] / [`estimate`]: clamped dwell-time derivation
//! - [`Scroller`]: the owner tying canvas, state and configuration together

mod duration;
mod scroller;
mod state;
mod window;

pub use duration::{estimate, DurationBounds};
pub use scroller::{ScrollSnapshot, Scroller, ScrollerConfig};
pub use state::{ScrollState, MAX_SPEED, MIN_SPEED};
pub use window::visible_window;
