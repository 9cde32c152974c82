//! Transition engine: one-shot animated switches between two frames.
//!
//! The engine builds a composite twice the display extent along the
//! scroll axis, then slides a display-sized window across it, emitting
//! one frame per step. Frame count comes from either a pixel step
//! (speed mode) or wall-clock duration times the target frame rate
//! (duration mode); pacing sleeps the remainder of each frame budget so
//! the realized rate tracks the profile without coupling it to pixel
//! speed.
//!
//! Each `run` call is self-contained: Idle, animate, Idle. The only
//! state the engine keeps across calls is the active profile and the
//! frame-rate statistics.

use std::time::{Duration, Instant};

use super::config::{TransitionConfig, TransitionKind, TransitionTiming};
use crate::buffer::PixelBuffer;
use crate::perf::{FrameRateStats, PerformanceProfile};
use crate::sink::DisplaySink;

/// Remainders below this are not worth sleeping on a coarse clock.
const SLEEP_THRESHOLD: Duration = Duration::from_millis(1);

/// Runs animated frame switches against a display sink.
pub struct TransitionEngine {
    /// Active pacing profile.
    profile: PerformanceProfile,
    /// Rolling frame statistics across runs.
    stats: FrameRateStats,
}

impl TransitionEngine {
    /// Create an engine with the given pacing profile.
    pub fn new(profile: PerformanceProfile) -> Self {
        Self {
            profile,
            stats: FrameRateStats::new(),
        }
    }

    /// The active profile.
    pub const fn profile(&self) -> PerformanceProfile {
        self.profile
    }

    /// Replace the pacing profile.
    pub fn set_profile(&mut self, profile: PerformanceProfile) {
        self.profile = profile;
    }

    /// Select a preset profile by name.
    ///
    /// Unknown names keep the current profile and return `false`.
    pub fn set_profile_by_name(&mut self, name: &str) -> bool {
        match PerformanceProfile::by_name(name) {
            Some(profile) => {
                self.profile = profile;
                true
            }
            None => {
                tracing::warn!(profile = name, "unknown performance profile, keeping current");
                false
            }
        }
    }

    /// Frame statistics accumulated across runs.
    pub const fn stats(&self) -> &FrameRateStats {
        &self.stats
    }

    /// Discard accumulated frame statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Animate the switch from `from` to `to`, emitting every frame to
    /// `sink`. Returns the number of frames actually emitted.
    ///
    /// Disabled configs and the redraw kind replace the frame in one
    /// step. A failed emission mid-animation degrades to an immediate
    /// redraw of `to` and ends the run; it is logged, never propagated.
    /// The display is left showing `to` on every path a working sink
    /// allows.
    pub fn run<S: DisplaySink>(
        &mut self,
        from: &PixelBuffer,
        to: &PixelBuffer,
        config: &TransitionConfig,
        sink: &mut S,
    ) -> u32 {
        if !config.enabled || config.kind == TransitionKind::Redraw {
            return self.emit_redraw(to, sink);
        }

        let display_width = to.width();
        let display_height = to.height();
        let scroll_distance = if config.kind.is_horizontal() {
            display_width
        } else {
            display_height
        };

        let composite = build_composite(from, to, config.kind);
        let total_frames = frame_count(&config.timing, scroll_distance, self.profile.target_fps());

        let mut emitted = 0u32;
        for i in 0..total_frames {
            let frame_start = Instant::now();

            let progress = if total_frames > 1 {
                f64::from(i) / f64::from(total_frames - 1)
            } else {
                0.0
            };
            let offset = ((progress * f64::from(scroll_distance)).round() as u32)
                .min(scroll_distance - 1);
            let start = if config.kind.is_reversed() {
                scroll_distance - offset
            } else {
                offset
            };

            let frame = slice_window(
                &composite,
                start,
                display_width,
                display_height,
                config.kind.is_horizontal(),
            );
            if let Err(err) = sink.emit(&frame) {
                tracing::warn!(error = %err, frame = i, "frame emission failed, degrading to redraw");
                emitted += self.emit_redraw(to, sink);
                return emitted;
            }
            emitted += 1;

            let elapsed = frame_start.elapsed();
            self.stats.record(elapsed, Instant::now());
            if let Some(remaining) = self.profile.frame_budget().checked_sub(elapsed) {
                if remaining > SLEEP_THRESHOLD {
                    std::thread::sleep(remaining);
                }
            }
        }

        // Offsets are clamped one pixel short of the destination, so the
        // animated loop can never land exactly on `to`.
        emitted += self.emit_redraw(to, sink);
        emitted
    }

    /// Emit `to` as a single frame. Returns 1 on success, 0 on failure.
    fn emit_redraw<S: DisplaySink>(&mut self, to: &PixelBuffer, sink: &mut S) -> u32 {
        let frame_start = Instant::now();
        let result = sink.emit(to);
        self.stats.record(frame_start.elapsed(), Instant::now());
        match result {
            Ok(()) => 1,
            Err(err) => {
                tracing::warn!(error = %err, "destination redraw failed");
                0
            }
        }
    }
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self::new(PerformanceProfile::default())
    }
}

/// Number of frames the animation will render.
///
/// Speed mode divides the scroll distance by the per-frame step
/// (clamped to at least one pixel); duration mode multiplies wall-clock
/// seconds by the target rate and never consults pixel speed. Both
/// produce at least one frame.
fn frame_count(timing: &TransitionTiming, scroll_distance: u32, target_fps: u32) -> u32 {
    match *timing {
        TransitionTiming::Speed { px_per_frame } => {
            let px = if px_per_frame.is_finite() {
                px_per_frame.max(1.0)
            } else {
                1.0
            };
            ((f64::from(scroll_distance) / px).round() as u32).max(1)
        }
        TransitionTiming::Duration { seconds } => {
            let secs = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
            ((secs * f64::from(target_fps)).round() as u32).max(1)
        }
    }
}

/// Build the fixed "world" the window slides across: twice the display
/// extent along the scroll axis, with `from` at the window's starting
/// position and `to` where the slide ends.
fn build_composite(from: &PixelBuffer, to: &PixelBuffer, kind: TransitionKind) -> PixelBuffer {
    let width = to.width();
    let height = to.height();
    match kind {
        TransitionKind::ScrollLeft => {
            let mut composite = PixelBuffer::new(width * 2, height);
            composite.blit(from, 0, 0);
            composite.blit(to, width, 0);
            composite
        }
        TransitionKind::ScrollRight => {
            let mut composite = PixelBuffer::new(width * 2, height);
            composite.blit(to, 0, 0);
            composite.blit(from, width, 0);
            composite
        }
        TransitionKind::ScrollUp => {
            let mut composite = PixelBuffer::new(width, height * 2);
            composite.blit(from, 0, 0);
            composite.blit(to, 0, height);
            composite
        }
        TransitionKind::ScrollDown => {
            let mut composite = PixelBuffer::new(width, height * 2);
            composite.blit(to, 0, 0);
            composite.blit(from, 0, height);
            composite
        }
        // Redraw never reaches composite construction
        TransitionKind::Redraw => to.clone(),
    }
}

/// Slice the display-sized window at `start` along the scroll axis.
fn slice_window(
    composite: &PixelBuffer,
    start: u32,
    display_width: u32,
    display_height: u32,
    horizontal: bool,
) -> PixelBuffer {
    let mut out = PixelBuffer::new(display_width, display_height);
    if horizontal {
        out.blit_region(composite, start, 0, display_width, display_height, 0, 0);
    } else {
        out.blit_region(composite, 0, start, display_width, display_height, 0, 0);
    }
    out
}
