//! Sink module: the display-flush boundary.
//!
//! The rendering core only produces display-sized frames; pushing them
//! to hardware is someone else's job. [`DisplaySink`] is that seam.
//! [`CaptureSink`] records frames for headless runs and tests,
//! [`TerminalSink`](terminal::TerminalSink) emulates a panel in a
//! terminal, and [`ThreadedSink`](threaded::ThreadedSink) moves any sink
//! onto its own worker thread.

pub mod terminal;
pub mod threaded;

pub use terminal::TerminalSink;
pub use threaded::ThreadedSink;

use crate::buffer::PixelBuffer;
use thiserror::Error;

/// Errors surfaced by a display sink.
///
/// The rendering core treats these as degradable: a failed frame is
/// logged and the animation falls back to a direct redraw, it never
/// propagates as a fatal error.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Underlying terminal or device I/O failed.
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The worker thread behind a threaded sink is gone.
    #[error("sink worker disconnected")]
    Disconnected,

    /// Device-specific failure reported by a driver.
    #[error("sink backend error: {0}")]
    Backend(String),
}

/// A destination for display-sized frames.
///
/// `emit` returns once the frame has been submitted; submission latency
/// is the sink's business and is absorbed by the transition engine's
/// frame pacing.
pub trait DisplaySink {
    /// Push one display-sized frame.
    fn emit(&mut self, frame: &PixelBuffer) -> Result<(), SinkError>;
}

/// Sink that keeps every emitted frame in memory.
///
/// Useful for headless rendering and as the assertion point in tests.
#[derive(Debug, Default)]
pub struct CaptureSink {
    frames: Vec<PixelBuffer>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames emitted so far, in emission order.
    pub fn frames(&self) -> &[PixelBuffer] {
        &self.frames
    }

    /// Number of frames emitted so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The most recently emitted frame.
    pub fn last(&self) -> Option<&PixelBuffer> {
        self.frames.last()
    }

    /// Drop all recorded frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl DisplaySink for CaptureSink {
    fn emit(&mut self, frame: &PixelBuffer) -> Result<(), SinkError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_sink_records_in_order() {
        let mut sink = CaptureSink::new();
        assert!(sink.is_empty());

        let a = PixelBuffer::new(4, 2);
        let mut b = PixelBuffer::new(4, 2);
        b.set(0, 0, crate::buffer::Rgb::WHITE);

        sink.emit(&a).unwrap();
        sink.emit(&b).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.frames()[1], b);
        assert_eq!(sink.last(), Some(&b));
    }
}
