//! Threaded sink adapter: move any sink onto its own worker thread.
//!
//! Hardware flushes can be slow or jittery. This adapter feeds frames
//! through a small bounded channel to a dedicated thread so the caller's
//! frame loop only pays the cost of a clone and a send. The bounded
//! channel provides backpressure instead of letting frames queue up
//! without limit, and frames arrive at the inner sink strictly in
//! emission order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};

use super::{DisplaySink, SinkError};
use crate::buffer::PixelBuffer;

/// How long the worker waits for a frame before re-checking shutdown.
const IDLE_POLL: Duration = Duration::from_millis(16);

/// A display sink running on its own worker thread.
pub struct ThreadedSink {
    /// Frame channel into the worker.
    frame_tx: Sender<PixelBuffer>,
    /// Handle to the worker thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl ThreadedSink {
    /// Spawn a worker thread that forwards frames to `inner`.
    ///
    /// The channel holds at most `queue` frames; a full queue blocks the
    /// sender, which keeps emission order intact and bounds memory.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the worker thread.
    pub fn spawn<S: DisplaySink + Send + 'static>(inner: S, queue: usize) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let (frame_tx, frame_rx) = bounded(queue.max(1));

        let handle = thread::Builder::new()
            .name("marquee-sink".to_string())
            .spawn(move || {
                Self::run_loop(&frame_rx, &shutdown_clone, inner);
            })
            .expect("Failed to spawn sink thread");

        Self {
            frame_tx,
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the worker to shut down.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Stop the worker and wait for it to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Worker loop: drain frames until shutdown or disconnect.
    fn run_loop<S: DisplaySink>(
        frame_rx: &Receiver<PixelBuffer>,
        shutdown: &Arc<AtomicBool>,
        mut inner: S,
    ) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }
            match frame_rx.recv_timeout(IDLE_POLL) {
                Ok(frame) => {
                    if let Err(err) = inner.emit(&frame) {
                        // One bad flush must not kill the worker
                        tracing::warn!(error = %err, "inner sink rejected frame");
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }
}

impl DisplaySink for ThreadedSink {
    fn emit(&mut self, frame: &PixelBuffer) -> Result<(), SinkError> {
        self.frame_tx
            .send(frame.clone())
            .map_err(|_| SinkError::Disconnected)
    }
}

impl Drop for ThreadedSink {
    fn drop(&mut self) {
        self.shutdown();
    }
}
