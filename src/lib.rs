//! # Marquee
//!
//! A glitch-free scroll and transition renderer for LED matrix displays.
//!
//! Marquee turns a list of pre-rasterized content tiles into a continuous
//! wrap-around scrolling pixel stream, and animates switches between two
//! static frames with scroll speed fully decoupled from render frame rate.
//!
//! ## Core Concepts
//!
//! - **Composite canvas**: one wide off-screen buffer built from content
//!   tiles plus gaps; scrolling crops against it and wraps at its edge
//! - **Wall-clock scrolling**: position advances from measured elapsed
//!   time, so the driver loop's call cadence never changes on-screen speed
//! - **Decoupled transitions**: frame count derives from duration × target
//!   fps (or a pixel step), pacing sleeps the remainder of each budget
//! - **Sinks**: frames leave through a small trait; terminal emulator and
//!   worker-thread adapters included
//!
//! ## Example
//!
//! ```rust,ignore
//! use marquee::{PixelBuffer, Scroller, ScrollerConfig};
//! use std::time::Instant;
//!
//! // A 64x32 panel
//! let mut scroller = Scroller::new(64, 32, ScrollerConfig::default());
//! scroller.set_content(&[PixelBuffer::new(120, 32)]);
//!
//! loop {
//!     scroller.advance(Instant::now());
//!     let frame = scroller.visible_window().unwrap();
//!     // push `frame` to the panel...
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod perf;
pub mod scroll;
pub mod sink;
pub mod transition;

// Re-exports for convenience
pub use buffer::{Compositor, PixelBuffer, Rgb};
pub use perf::{FrameRateStats, PerformanceProfile, ProfileStats};
pub use scroll::{DurationBounds, ScrollSnapshot, ScrollState, Scroller, ScrollerConfig};
pub use sink::{CaptureSink, DisplaySink, SinkError};
pub use transition::{TransitionConfig, TransitionEngine, TransitionKind, TransitionTiming};
