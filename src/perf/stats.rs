//! Frame-rate statistics: a rolling window of frame times.
//!
//! Stats are explicit instance state owned by whoever drives the frame
//! loop, with an explicit reset. There are no process-wide counters.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of frame samples kept in the rolling window.
const SAMPLE_WINDOW: usize = 100;

/// Minimum spacing between two telemetry log lines.
const REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Rolling frame-time statistics with periodic logging.
///
/// Each recorded frame feeds a window of the last [`SAMPLE_WINDOW`]
/// samples; the averaged rate is emitted through `tracing` no more than
/// once per [`REPORT_INTERVAL`].
#[derive(Debug, Clone, Default)]
pub struct FrameRateStats {
    /// Most recent frame times, oldest first.
    samples: VecDeque<Duration>,
    /// Total frames recorded since construction or reset.
    total_frames: u64,
    /// When the stats were last reported.
    last_report: Option<Instant>,
}

impl FrameRateStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame's produce+emit time.
    ///
    /// Logs the rolling average at most once per report interval.
    pub fn record(&mut self, frame_time: Duration, now: Instant) {
        while self.samples.len() >= SAMPLE_WINDOW {
            self.samples.pop_front();
        }
        self.samples.push_back(frame_time);
        self.total_frames += 1;

        match self.last_report {
            None => self.last_report = Some(now),
            Some(last) if now.duration_since(last) >= REPORT_INTERVAL => {
                tracing::info!(
                    avg_fps = self.average_fps(),
                    avg_frame_us = self.average_frame_time().as_micros() as u64,
                    frames = self.total_frames,
                    "frame rate report"
                );
                self.last_report = Some(now);
            }
            Some(_) => {}
        }
    }

    /// Average frames per second over the rolling window.
    ///
    /// 0 when nothing has been recorded or the window spans zero time.
    pub fn average_fps(&self) -> f64 {
        let total: Duration = self.samples.iter().sum();
        let secs = total.as_secs_f64();
        if secs > 0.0 {
            self.samples.len() as f64 / secs
        } else {
            0.0
        }
    }

    /// Average frame time over the rolling window.
    pub fn average_frame_time(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.samples.iter().sum();
        total / self.samples.len() as u32
    }

    /// Total frames recorded since construction or reset.
    pub const fn frame_count(&self) -> u64 {
        self.total_frames
    }

    /// Discard all samples and counters.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.total_frames = 0;
        self.last_report = None;
    }
}
